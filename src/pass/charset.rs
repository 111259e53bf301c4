//! Character class catalog and class-set building.

use std::borrow::Cow;

use crate::settings::Settings;

pub const DIGITS: &str = "0123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SPECIAL: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digits,
    Lowercase,
    Uppercase,
    Special,
}

impl CharClass {
    /// Catalog order; also the seeding order of a generated password.
    pub const ALL: [CharClass; 4] = [
        CharClass::Digits,
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Digits => DIGITS,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Digits => "number",
            CharClass::Lowercase => "lower-case",
            CharClass::Uppercase => "upper-case",
            CharClass::Special => "special",
        }
    }
}

/// Build the ordered class set selected by `settings`.
///
/// A custom special set replaces the catalog one; an empty custom set is
/// passed through so the generator can reject it.
pub fn classes(settings: &Settings) -> Vec<Cow<'static, str>> {
    let mut set = Vec::with_capacity(CharClass::ALL.len());

    for class in CharClass::ALL {
        if !settings.uses(class) {
            continue;
        }
        match (class, &settings.special_chars) {
            (CharClass::Special, Some(custom)) => set.push(Cow::Owned(custom.clone())),
            _ => set.push(Cow::Borrowed(class.chars())),
        }
    }

    set
}

/// Number of characters in the union of the selected classes, counting
/// duplicates (used for the entropy estimate).
pub fn size<S: AsRef<str>>(classes: &[S]) -> usize {
    classes.iter().map(|c| c.as_ref().chars().count()).sum()
}

/// Estimated entropy in bits of a password drawn uniformly from `size` chars.
pub fn entropy_bits(length: usize, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    length as f64 * (size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_select_all_classes_in_catalog_order() {
        let set = classes(&Settings::default());
        assert_eq!(set, vec![DIGITS, LOWERCASE, UPPERCASE, SPECIAL]);
    }

    #[test]
    fn custom_special_replaces_catalog() {
        let settings = Settings {
            use_digits: false,
            use_lowercase: false,
            special_chars: Some("!@#".to_string()),
            ..Default::default()
        };
        assert_eq!(classes(&settings), vec![UPPERCASE, "!@#"]);
    }

    #[test]
    fn deselected_classes_are_skipped() {
        let settings = Settings {
            use_digits: true,
            use_lowercase: false,
            use_uppercase: false,
            use_special: false,
            ..Default::default()
        };
        assert_eq!(classes(&settings), vec![DIGITS]);
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(size(&[DIGITS, LOWERCASE, UPPERCASE, SPECIAL]), 10 + 26 + 26 + 33);
        assert_eq!(size::<&str>(&[]), 0);
    }

    #[test]
    fn entropy_labels() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
        assert_eq!(entropy_strength(entropy_bits(8, 10)), "Weak");
        assert_eq!(entropy_strength(entropy_bits(20, 95)), "Very Strong");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(64.0), "Strong");
    }
}
