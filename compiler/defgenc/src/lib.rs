//! defgen driver.
//!
//! Reads macro definition files, evaluates them and writes Verilog
//! `` `define`` (or `` `undef``) directives. The binary is a thin wrapper
//! over [`commands::run_generate`]; the pipeline itself is
//! [`commands::generate`], which works on in-memory sources.

pub mod commands;
pub mod config;
mod error;
mod tracing_setup;

pub use config::{parse_args, Command, GenerateOptions, InputSource};
pub use error::CliError;
pub use tracing_setup::init_tracing;

/// Program name shown in the banner and `--version`.
pub const TOOL_NAME: &str = "defgen";

/// `defgen 0.1.0`.
pub fn tool_version() -> String {
    format!("{TOOL_NAME} {}", env!("CARGO_PKG_VERSION"))
}
