//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `,` or `|`
//! inside a field; `|n` and `|r` stand for line breaks.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::Settings;

const FIELDS: usize = 8;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_digits,
        settings.use_lowercase,
        settings.use_uppercase,
        settings.use_special,
        escape(settings.special_chars.as_deref().unwrap_or("")),
        escape(&settings.output_file_path),
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

/// Missing file yields defaults; a malformed one is an `InvalidData` error.
pub fn load(path: &Path) -> io::Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    let line = data.lines().next().unwrap_or("");
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(invalid(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    let settings = Settings {
        pass_length: parse(&parts[0])?,
        number_of_passwords: parse(&parts[1])?,
        use_digits: parse(&parts[2])?,
        use_lowercase: parse(&parts[3])?,
        use_uppercase: parse(&parts[4])?,
        use_special: parse(&parts[5])?,
        special_chars: Some(parts[6].clone()).filter(|s| !s.is_empty()),
        output_file_path: parts[7].clone(),
    };
    log::debug!("settings loaded from {}", path.display());
    Ok(settings)
}

fn parse<T: std::str::FromStr>(field: &str) -> io::Result<T> {
    field
        .parse()
        .map_err(|_| invalid(format!("bad settings field: {field:?}")))
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ',' | '|' => {
                out.push('|');
                out.push(c);
            }
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(match c {
                'n' => '\n',
                'r' => '\r',
                _ => c,
            });
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            pass_length: 42,
            number_of_passwords: 3,
            use_digits: false,
            use_special: true,
            special_chars: Some("|,!,|".to_string()),
            output_file_path: "out,put.txt".to_string(),
            ..Default::default()
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn line_breaks_survive_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let settings = Settings {
            special_chars: Some("a\nb\r\nc|n".to_string()),
            output_file_path: "dir\nname.txt".to_string(),
            ..Default::default()
        };

        save(&path, &settings).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(&dir.path().join("nope")).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        fs::write(&path, "16,1,true\n").unwrap();
        assert_eq!(load(&path).unwrap_err().kind(), io::ErrorKind::InvalidData);

        fs::write(&path, "sixteen,1,true,true,true,true,,\n").unwrap();
        assert_eq!(load(&path).unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        save(&path, &Settings::default()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b,", ','), vec!["a", "", "b", ""]);
        assert_eq!(split_escaped("a|,b,c||", ','), vec!["a,b", "c|"]);
        assert_eq!(split_escaped(&escape("x,|y"), ','), vec!["x,|y"]);
        assert_eq!(escape("a\nb\r"), "a|nb|r");
        assert_eq!(split_escaped("a|nb|r,n", ','), vec!["a\nb\r", "n"]);
    }
}
