//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::io;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::clipboard::ClipboardError;
use crate::pass::{self, output::OutputError};
use crate::settings::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Length must be between {} and {} characters, got {0}", MIN_LENGTH, MAX_LENGTH)]
    LengthOutOfRange(usize),
    #[error("Number of passwords must be at least 1")]
    ZeroCount,
    #[error(transparent)]
    Generate(#[from] pass::Error),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error("Cannot open {path}: {source}")]
    OpenOutput { path: String, source: io::Error },
    #[error("Failed to save settings: {0}")]
    SaveSettings(#[source] io::Error),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) | Error::LengthOutOfRange(_) | Error::ZeroCount => 2,
            _ => 1,
        }
    }
}

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&e.to_string());
            if e.exit_code() == 2 {
                prompts::error("Try --help for usage.");
            }
            e.exit_code()
        }
    }
}
