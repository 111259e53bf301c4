/// Rejections from password generation. All of them are caller-input
/// problems except `IndexOutOfRange`, which means the shuffle went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("password length {length} is too short to include all {classes} character classes")]
    InvalidLength { length: usize, classes: usize },
    #[error("no character classes selected")]
    EmptyClassSet,
    #[error("character class {index} is empty")]
    EmptyClass { index: usize },
    #[error("swap index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
