//! The generate command: definitions in, directives out.
//!
//! Output is all-or-nothing. Every problem in every input is reported, and
//! if there was any error nothing is written, not even an empty file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use defgen_diagnostic::{DiagnosticQueue, ErrorGuaranteed};
use defgen_emit::{emit_defines, emit_undefines, Header};
use defgen_eval::{evaluate_all, EvalCounters};
use defgen_ir::MacroTable;
use defgen_parse::{merge_into, parse_source};

use crate::config::{GenerateOptions, InputSource};
use crate::error::CliError;
use crate::tool_version;

/// Name used for standard input in messages.
pub const STDIN_NAME: &str = "<stdin>";

/// One definitions source, already read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceInput {
    /// File name for diagnostics.
    pub name: String,
    pub text: String,
}

impl SourceInput {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceInput {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A successful run's output.
#[derive(Clone, Debug)]
pub struct Generated {
    pub text: String,
    /// Present when macros were evaluated (not in undefine mode).
    pub counters: Option<EvalCounters>,
}

/// Read every input named in `options`, or standard input if none.
pub fn read_inputs(options: &GenerateOptions) -> Result<Vec<SourceInput>, CliError> {
    if options.inputs.is_empty() {
        return read_source(&InputSource::Stdin).map(|input| vec![input]);
    }
    options.inputs.iter().map(read_source).collect()
}

fn read_source(input: &InputSource) -> Result<SourceInput, CliError> {
    match input {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: STDIN_NAME.to_string(),
                    source,
                })?;
            Ok(SourceInput::new(STDIN_NAME, text))
        }
        InputSource::File(path) => {
            let name = path.display().to_string();
            match fs::read_to_string(path) {
                Ok(text) => Ok(SourceInput::new(name, text)),
                Err(source) => Err(CliError::Read { path: name, source }),
            }
        }
    }
}

/// Parse, check and render `inputs`.
///
/// Diagnostics go to `queue`; the error case proves at least one error is in
/// it. Warnings never cause failure.
#[tracing::instrument(level = "debug", skip_all, fields(inputs = inputs.len(), undef = options.undef))]
pub fn generate(
    inputs: &[SourceInput],
    options: &GenerateOptions,
    queue: &mut DiagnosticQueue,
) -> Result<Generated, ErrorGuaranteed> {
    let mut table = MacroTable::new();
    let mut verbatim = Vec::new();

    for input in inputs {
        let parsed = parse_source(&input.text);
        for warning in &parsed.warnings {
            queue.add(warning.to_diagnostic(&input.text, &input.name));
        }
        for error in &parsed.errors {
            queue.emit_error(error.to_diagnostic(&input.text, &input.name));
        }
        for error in merge_into(&mut table, parsed.file.entries) {
            queue.emit_error(error.to_diagnostic(&input.text, &input.name));
        }
        verbatim.extend(parsed.file.verbatim);
    }

    if let Some(guar) = queue.has_errors() {
        tracing::debug!(errors = queue.error_count(), "stopping after parse errors");
        return Err(guar);
    }

    let header = Header::new(tool_version());

    // Undefine mode lists every name and never evaluates
    if options.undef {
        return Ok(Generated {
            text: emit_undefines(&header, table.names()),
            counters: None,
        });
    }

    let outcome = evaluate_all(&table);
    for failure in &outcome.failures {
        queue.emit_error(failure.to_diagnostic());
    }
    if let Some(guar) = queue.has_errors() {
        return Err(guar);
    }

    let entries = outcome.printable(&table);
    Ok(Generated {
        text: emit_defines(&header, &verbatim, &entries),
        counters: Some(outcome.counters),
    })
}

/// Write `text` to `path`, or to standard output.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

/// Run the whole command. Returns `true` on success.
///
/// Diagnostics, the error count and the profile go to stderr.
pub fn run_generate(options: &GenerateOptions) -> bool {
    let inputs = match read_inputs(options) {
        Ok(inputs) => inputs,
        Err(err) => {
            report_cli_error(&err);
            return false;
        }
    };

    let mut queue = DiagnosticQueue::new();
    let result = generate(&inputs, options, &mut queue);
    let summary = queue.summary();
    for diag in queue.flush() {
        eprintln!("{diag}");
    }

    let generated = match result {
        Ok(generated) => generated,
        Err(_) => {
            if let Some(summary) = summary {
                eprintln!("{summary}");
            }
            return false;
        }
    };

    if options.profile {
        if let Some(counters) = &generated.counters {
            eprintln!("{}", counters.report());
        }
    }

    match write_output(options.output.as_deref(), &generated.text) {
        Ok(()) => true,
        Err(err) => {
            report_cli_error(&err);
            false
        }
    }
}

/// Print a driver error the way the diagnostics are printed.
pub fn report_cli_error(err: &CliError) {
    match err.to_diagnostic() {
        Some(diag) => eprintln!("{diag}"),
        None => eprintln!("error: {err}"),
    }
}
