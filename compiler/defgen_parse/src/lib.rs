//! Parser for defgen definition files.
//!
//! Turns source text into a [`ParsedFile`]: the macro entries it defines and
//! the verbatim lines it carries. Parsing never stops at the first problem;
//! a bad line is reported and skipped so one run shows every error.
//!
//! ```text
//! /// Data bus width.
//! define WIDTH = 32
//! define MASK  = (1 << WIDTH) - 1
//! hidden BASE  = 0x1000
//! verbatim "`timescale 1ns/1ps"
//! ```

mod cursor;
mod error;
mod grammar;

use defgen_ir::{MacroEntry, MacroTable};
use defgen_lexer::{lex, Token, TokenKind};

pub use error::{ParseError, ParseErrorKind, ParseWarning};

use cursor::Cursor;

/// Everything one definitions file contributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// Definitions in source order.
    pub entries: Vec<MacroEntry>,
    /// Lines copied to the output ahead of the directives.
    pub verbatim: Vec<String>,
}

/// Result of parsing one file.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub file: ParsedFile,
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseWarning>,
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    warnings: Vec<ParseWarning>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Parse a definitions source.
#[tracing::instrument(level = "debug", skip(source), fields(bytes = source.len()))]
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = lex(source);
    let mut parser = Parser::new(&lexed.tokens);
    let file = parser.parse_file();

    let newlines: Vec<u32> = lexed
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Newline)
        .map(|t| t.span.start)
        .collect();
    let lex_lines: Vec<usize> = lexed
        .errors
        .iter()
        .map(|e| line_index(&newlines, e.span.start))
        .collect();
    let mut errors: Vec<ParseError> = lexed.errors.into_iter().map(ParseError::from).collect();
    // A line with a lex error is reported once
    errors.extend(
        parser
            .errors
            .into_iter()
            .filter(|e| !lex_lines.contains(&line_index(&newlines, e.span.start))),
    );
    errors.sort_by_key(|e| e.span.start);

    tracing::debug!(
        entries = file.entries.len(),
        verbatim = file.verbatim.len(),
        errors = errors.len(),
        "parsed definitions"
    );

    ParseOutput {
        file,
        errors,
        warnings: parser.warnings,
    }
}

/// Index of the logical line holding byte `offset`, given the sorted starts
/// of the newline tokens. Continued lines count as one.
fn line_index(newlines: &[u32], offset: u32) -> usize {
    newlines.partition_point(|&start| start < offset)
}

/// Move the entries of `entries` into `table`.
///
/// Names already present (from this file or an earlier one) are rejected;
/// the first definition is kept.
pub fn merge_into(table: &mut MacroTable, entries: Vec<MacroEntry>) -> Vec<ParseError> {
    let mut errors = Vec::new();
    for entry in entries {
        if let Err(dup) = table.insert(entry) {
            errors.push(ParseError::new(
                ParseErrorKind::DuplicateDefinition {
                    name: dup.rejected.name,
                },
                dup.rejected.span,
            ));
        }
    }
    errors
}

#[cfg(test)]
mod tests;
