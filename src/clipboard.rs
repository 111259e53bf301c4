//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

#[derive(Debug, thiserror::Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(String);

pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn open() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(Clipboard)
            .map_err(|e| ClipboardError(e.to_string()))
    }

    /// Place `text` on the clipboard.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))?;
        // Some providers keep a copy of what they hand back; wipe ours
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
