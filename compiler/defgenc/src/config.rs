//! Command-line configuration.
//!
//! ```text
//! defgen [OPTION]... [FILE]...
//! ```
//!
//! With no FILE, or when FILE is `-`, definitions are read from standard
//! input.

use std::path::PathBuf;

use crate::error::CliError;

/// Where one definitions source comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// `-` on the command line.
    Stdin,
    File(PathBuf),
}

/// Settings for one generate run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Definition files, read in order. Empty means standard input.
    pub inputs: Vec<InputSource>,
    /// Output file. `None` means standard output.
    pub output: Option<PathBuf>,
    /// Emit `` `undef`` directives instead of `` `define``.
    pub undef: bool,
    /// Print evaluation counters to stderr.
    pub profile: bool,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Generate(GenerateOptions),
}

/// Parse arguments (without the program name).
///
/// `--help` and `--version` win over everything else on the line. After
/// `--`, every argument is a file; `-` still means standard input.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut options = GenerateOptions::default();
    let mut only_files = false;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        i += 1;

        if arg == "-" {
            options.inputs.push(InputSource::Stdin);
            continue;
        }
        if only_files || !arg.starts_with('-') {
            options.inputs.push(InputSource::File(PathBuf::from(arg)));
            continue;
        }

        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-u" | "--undef" => options.undef = true,
            "--profile" => options.profile = true,
            "--" => only_files = true,
            "-o" | "--output" => {
                let Some(path) = args.get(i) else {
                    return Err(CliError::MissingValue("--output"));
                };
                options.output = Some(PathBuf::from(path));
                i += 1;
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--output=") {
                    if path.is_empty() {
                        return Err(CliError::MissingValue("--output"));
                    }
                    options.output = Some(PathBuf::from(path));
                } else {
                    return Err(CliError::UnknownOption(arg.to_string()));
                }
            }
        }
    }

    Ok(Command::Generate(options))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests can panic")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn file(path: &str) -> InputSource {
        InputSource::File(PathBuf::from(path))
    }

    fn generate(list: &[&str]) -> GenerateOptions {
        match parse_args(&args(list)) {
            Ok(Command::Generate(options)) => options,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_reads_stdin() {
        assert_eq!(generate(&[]), GenerateOptions::default());
    }

    #[test]
    fn files_and_flags() {
        let options = generate(&["a.def", "-u", "b.def", "--profile", "-o", "out.vh"]);
        assert_eq!(options.inputs, vec![file("a.def"), file("b.def")]);
        assert_eq!(options.output, Some(PathBuf::from("out.vh")));
        assert!(options.undef);
        assert!(options.profile);
    }

    #[test]
    fn output_with_equals() {
        assert_eq!(generate(&["--output=x.vh"]).output, Some(PathBuf::from("x.vh")));
    }

    #[test]
    fn double_dash_ends_options() {
        assert_eq!(generate(&["--", "-u"]).inputs, vec![file("-u")]);
    }

    #[test]
    fn dash_is_standard_input() {
        assert_eq!(
            generate(&["a.def", "-", "--", "-"]).inputs,
            vec![file("a.def"), InputSource::Stdin, InputSource::Stdin]
        );
    }

    #[test]
    fn help_and_version_win() {
        assert_eq!(parse_args(&args(&["a.def", "--help"])).ok(), Some(Command::Help));
        assert_eq!(parse_args(&args(&["-v", "--bogus"])).ok(), Some(Command::Version));
    }

    #[test]
    fn missing_output_value() {
        let err = parse_args(&args(&["-o"])).unwrap_err();
        assert_eq!(err.to_string(), "option `--output` requires a value");
        assert!(err.is_usage());
    }

    #[test]
    fn unknown_option() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option `--frobnicate`");
        assert!(err.to_diagnostic().is_none());
    }
}
