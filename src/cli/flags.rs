#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub interactive: bool,
    pub digits: bool,
    pub lower: bool,
    pub upper: bool,
    pub special: bool,
    pub no_special: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    pub special_chars: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when any of `--digits/--lower/--upper/--special` was given;
    /// those replace the saved class selection instead of adding to it.
    pub fn selects_classes(&self) -> bool {
        self.digits || self.lower || self.upper || self.special
    }
}
