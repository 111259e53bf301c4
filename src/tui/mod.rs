//! Interactive mode: prompt for length and classes, then generate.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::rand::Source;

/// Run interactive mode.
pub fn run(source: Source) {
    let mut rng = source.rng();
    session(&mut *rng);
}
