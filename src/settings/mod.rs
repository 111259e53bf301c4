//! Password generation settings.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::charset::CharClass;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_digits: bool,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_special: bool,
    /// Replaces the catalog special characters when set.
    pub special_chars: Option<String>,
    pub output_file_path: String,
}

impl Settings {
    pub fn uses(&self, class: CharClass) -> bool {
        match class {
            CharClass::Digits => self.use_digits,
            CharClass::Lowercase => self.use_lowercase,
            CharClass::Uppercase => self.use_uppercase,
            CharClass::Special => self.use_special,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Digits => self.use_digits = enabled,
            CharClass::Lowercase => self.use_lowercase = enabled,
            CharClass::Uppercase => self.use_uppercase = enabled,
            CharClass::Special => self.use_special = enabled,
        }
    }

    pub fn any_class(&self) -> bool {
        CharClass::ALL.iter().any(|&c| self.uses(c))
    }

    pub fn load_from_file() -> Result<Self, std::io::Error> {
        file::load(&path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&path(), self)
    }

    pub fn has_saved() -> bool {
        path().exists()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            use_digits: true,
            use_lowercase: true,
            use_uppercase: true,
            use_special: true,
            special_chars: None,
            output_file_path: String::new(),
        }
    }
}

/// Settings file location: `$PASSFORGE_CONFIG`, else
/// `$HOME/.config/passforge/settings`.
pub fn path() -> PathBuf {
    if let Some(p) = std::env::var_os("PASSFORGE_CONFIG") {
        return PathBuf::from(p);
    }
    let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
    Path::new(&home).join(".config/passforge/settings")
}
