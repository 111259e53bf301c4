use std::fmt;
use std::ops::Deref;

use zeroize::Zeroize;

/// A generated password. The backing memory is wiped on drop.
pub struct Password(String);

impl Password {
    pub(super) fn from_chars(chars: &[char]) -> Self {
        let bytes = chars.iter().map(|c| c.len_utf8()).sum();
        // Sized up front so the buffer never reallocates and leaves copies behind
        let mut s = String::with_capacity(bytes);
        s.extend(chars);
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
