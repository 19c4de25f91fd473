//! Command handlers for the defgen CLI.

mod generate;

pub use generate::{
    generate, read_inputs, report_cli_error, run_generate, write_output, Generated, SourceInput,
    STDIN_NAME,
};
