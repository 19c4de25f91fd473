//! Driver errors: command-line misuse and I/O failures.

use std::io;

use defgen_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot write `{path}`: {source}")]
    Write { path: String, source: io::Error },
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires a value")]
    MissingValue(&'static str),
}

impl CliError {
    /// Whether this is a command-line mistake, worth following with usage.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::UnknownOption(_) | CliError::MissingValue(_))
    }

    /// I/O failures as diagnostics; `None` for usage errors.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let code = match self {
            CliError::Read { .. } => ErrorCode::E3001,
            CliError::Write { .. } => ErrorCode::E3002,
            CliError::UnknownOption(_) | CliError::MissingValue(_) => return None,
        };
        Some(Diagnostic::error(code).with_message(self.to_string()))
    }
}
