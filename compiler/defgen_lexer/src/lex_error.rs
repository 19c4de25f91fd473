//! Lexer errors.

use defgen_ir::Span;
use thiserror::Error;

/// What went wrong while tokenizing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("integer literal `{0}` is out of range")]
    InvalidNumber(String),
    #[error("invalid escape sequence `\\{0}` in string literal")]
    InvalidEscape(char),
}

/// A lexer error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    #[cold]
    pub(crate) fn invalid_escape(span: Span, escape: char) -> Self {
        Self::new(LexErrorKind::InvalidEscape(escape), span)
    }
}
