//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;
mod password;

pub use error::{Error, Result};
pub use generate::generate;
pub use password::Password;
