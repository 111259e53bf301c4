use super::CliFlags;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "-d" | "--default" => flags.default = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--digits" => flags.digits = true,
            "--lower" => flags.lower = true,
            "--upper" => flags.upper = true,
            "--special" => flags.special = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i)?),
            "--seed" => flags.seed = Some(number(args, &mut i)?),
            "--special-chars" => flags.special_chars = Some(value(args, &mut i)?.to_string()),
            "-o" | "--output" => {
                // Path is optional; a following flag means "use the default"
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("passforge")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&args("")).unwrap(), CliFlags::default());
    }

    #[test]
    fn values_and_switches() {
        let flags = parse(&args("-l 20 -n 3 --digits --upper -q --seed 99")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.seed, Some(99));
        assert!(flags.digits && flags.upper && flags.quiet);
        assert!(!flags.lower && !flags.special);
        assert!(flags.selects_classes());
    }

    #[test]
    fn output_path_is_optional() {
        assert_eq!(parse(&args("-o")).unwrap().output.as_deref(), Some("."));
        assert_eq!(parse(&args("-o -q")).unwrap().output.as_deref(), Some("."));
        let flags = parse(&args("--output out.txt -b")).unwrap();
        assert_eq!(flags.output.as_deref(), Some("out.txt"));
        assert!(flags.clipboard);
    }

    #[test]
    fn special_chars_take_the_next_argument_verbatim() {
        let flags = parse(&args("--special-chars -_.")).unwrap();
        assert_eq!(flags.special_chars.as_deref(), Some("-_."));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args("-l ten")).unwrap_err(),
            ParseError::InvalidNumber("ten".into())
        );
        assert_eq!(
            parse(&args("-l -5")).unwrap_err(),
            ParseError::InvalidNumber("-5".into())
        );
        assert_eq!(
            parse(&args("--length")).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert_eq!(
            parse(&args("--bogus")).unwrap_err(),
            ParseError::UnknownArg("--bogus".into())
        );
    }
}
