//! CLI context - bundles settings, flags, and the random source.

use std::fs::{File, OpenOptions};
use std::path::Path;

use super::{CliFlags, Error, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::pass::{charset, output};
use crate::rand::Source;
use crate::settings::{self, MAX_LENGTH, MIN_LENGTH, Settings};
use crate::tui;

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub source: Source,
}

impl Context {
    /// Parse arguments and resolve them against the saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, Error> {
        let flags = super::parse(&args)?;
        quiet::set(flags.quiet);

        let saved = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self::with_settings(flags, saved))
    }

    pub fn with_settings(flags: CliFlags, mut settings: Settings) -> Self {
        apply_flags(&flags, &mut settings);
        let source = match (flags.seed, flags.urandom) {
            (Some(seed), _) => Source::Seeded(seed),
            (None, true) => Source::Os,
            (None, false) => Source::Hardware,
        };
        Self {
            settings,
            flags,
            source,
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        if self.flags.help {
            tui::print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        if self.flags.interactive {
            tui::run(self.source);
            return Ok(());
        }

        self.validate()?;

        if self.flags.save {
            self.settings.save_to_file().map_err(Error::SaveSettings)?;
            prompts::settings_saved(&settings::path().display().to_string());
        }

        self.generate_output()
    }

    fn validate(&self) -> Result<(), Error> {
        let length = self.settings.pass_length;
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::LengthOutOfRange(length));
        }
        if self.settings.number_of_passwords == 0 {
            return Err(Error::ZeroCount);
        }
        Ok(())
    }

    /// Generate passwords and route them to clipboard, file or stdout.
    pub fn generate_output(&mut self) -> Result<(), Error> {
        let classes = charset::classes(&self.settings);
        let length = self.settings.pass_length;
        let count = self.settings.number_of_passwords;
        let mut rng = self.source.rng();

        if self.flags.clipboard {
            match Clipboard::open() {
                Ok(mut clipboard) => {
                    let passwords = output::collect_batch(&mut *rng, length, &classes, count)?;
                    clipboard.copy(&passwords)?;
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                }
            }
        }

        if !self.settings.output_file_path.is_empty() {
            let path = self.settings.output_file_path.clone();
            let mut file = open_output(&path)?;
            log::debug!("writing {count} password(s) to {path}");
            output::write_batch(&mut *rng, &mut file, length, &classes, count)?;
            let full_path = std::fs::canonicalize(&path)
                .map(|p| p.display().to_string())
                .unwrap_or(path);
            prompts::passwords_written(count, &full_path);
            return Ok(());
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        output::write_batch(&mut *rng, &mut out, length, &classes, count)?;
        Ok(())
    }
}

/// Apply CLI flags on top of `settings`.
fn apply_flags(flags: &CliFlags, settings: &mut Settings) {
    if let Some(len) = flags.length {
        settings.pass_length = len;
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }

    if flags.selects_classes() {
        settings.use_digits = flags.digits;
        settings.use_lowercase = flags.lower;
        settings.use_uppercase = flags.upper;
        settings.use_special = flags.special;
    }
    if flags.no_special {
        settings.use_special = false;
    }
    if let Some(ref chars) = flags.special_chars {
        settings.special_chars = Some(chars.clone());
    }

    if let Some(ref path) = flags.output {
        settings.output_file_path = output_path(path);
    }
}

/// `.` and directory paths get the default file name.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT_FILE)
    } else {
        path.to_string()
    }
}

fn open_output(path: &str) -> Result<File, Error> {
    let open_err = |source: std::io::Error| Error::OpenOutput {
        path: path.to_string(),
        source,
    };

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(open_err)?;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map_err(open_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

    fn context(args: &str, saved: Settings) -> Context {
        let argv: Vec<String> = std::iter::once("passforge")
            .chain(args.split_whitespace())
            .map(String::from)
            .collect();
        Context::with_settings(super::super::parse(&argv).unwrap(), saved)
    }

    #[test]
    fn flags_override_saved_settings() {
        let saved = Settings {
            pass_length: 30,
            number_of_passwords: 4,
            ..Default::default()
        };
        let ctx = context("-l 12", saved);
        assert_eq!(ctx.settings.pass_length, 12);
        assert_eq!(ctx.settings.number_of_passwords, 4);
        assert_eq!(ctx.source, Source::Hardware);
    }

    #[test]
    fn class_flags_replace_selection() {
        let ctx = context("--digits --upper", Settings::default());
        assert_eq!(charset::classes(&ctx.settings), vec![DIGITS, UPPERCASE]);

        let ctx = context("--no-special", Settings::default());
        assert_eq!(
            charset::classes(&ctx.settings),
            vec![DIGITS, LOWERCASE, UPPERCASE]
        );

        let ctx = context("", Settings::default());
        assert_eq!(
            charset::classes(&ctx.settings),
            vec![DIGITS, LOWERCASE, UPPERCASE, SPECIAL]
        );
    }

    #[test]
    fn source_selection() {
        assert_eq!(context("-u", Settings::default()).source, Source::Os);
        assert_eq!(
            context("-u --seed 5", Settings::default()).source,
            Source::Seeded(5)
        );
    }

    #[test]
    fn length_bounds() {
        assert!(matches!(
            context("-l 7", Settings::default()).validate(),
            Err(Error::LengthOutOfRange(7))
        ));
        assert!(matches!(
            context("-l 129", Settings::default()).validate(),
            Err(Error::LengthOutOfRange(129))
        ));
        assert!(context("-l 8", Settings::default()).validate().is_ok());
        assert!(context("-l 128", Settings::default()).validate().is_ok());
        assert!(matches!(
            context("-n 0", Settings::default()).validate(),
            Err(Error::ZeroCount)
        ));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Error::LengthOutOfRange(3).exit_code(), 2);
        assert_eq!(
            Error::Generate(crate::pass::Error::EmptyClassSet).exit_code(),
            1
        );
    }

    #[test]
    fn output_path_defaults() {
        assert_eq!(output_path("."), "passwords.txt");
        assert_eq!(output_path("out/"), "out/passwords.txt");
        assert_eq!(output_path("keys.txt"), "keys.txt");
    }

    #[test]
    fn writes_seeded_passwords_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/out.txt");
        let args = format!("-l 10 -n 3 --seed 11 -q -o {}", path.display());

        let mut ctx = context(&args, Settings::default());
        ctx.run().unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first.lines().count(), 3);
        assert!(first.lines().all(|l| l.chars().count() == 10));

        // Appends, and the same seed reproduces the same batch
        let mut ctx = context(&args, Settings::default());
        ctx.run().unwrap();
        let both = std::fs::read_to_string(&path).unwrap();
        assert_eq!(both, format!("{first}{first}"));
    }

    #[test]
    fn empty_custom_special_set_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut ctx = context(&format!("-q -o {}", path.display()), Settings::default());
        ctx.settings.special_chars = Some(String::new());
        assert!(matches!(
            ctx.run(),
            Err(Error::Output(output::OutputError::Generate(
                crate::pass::Error::EmptyClass { index: 3 }
            )))
        ));
    }
}
