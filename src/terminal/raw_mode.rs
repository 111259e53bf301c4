//! Raw mode RAII guard for single-key prompts.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Enables raw mode for its lifetime. Leaves raw mode alone on drop if it was
/// already on when the guard was taken, so guards can nest.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled()?;
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
        }
    }
}
