//! Parse error types.

use defgen_diagnostic::{Diagnostic, ErrorCode};
use defgen_ir::{Name, Span};
use defgen_lexer::{LexError, LexErrorKind};
use thiserror::Error;

/// What went wrong while reading a definitions file.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(#[from] LexErrorKind),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: String },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("unclosed `(`")]
    UnclosedParen,
    #[error("expected macro name, found {found}")]
    ExpectedIdentifier { found: String },
    #[error("macro `{name}` is defined more than once")]
    DuplicateDefinition { name: Name },
}

/// A parse error with its location in the source.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Error code for this kind of failure.
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(LexErrorKind::UnterminatedString) => ErrorCode::E0001,
            ParseErrorKind::Lex(LexErrorKind::InvalidCharacter(_)) => ErrorCode::E0002,
            ParseErrorKind::Lex(LexErrorKind::InvalidNumber(_)) => ErrorCode::E0003,
            ParseErrorKind::Lex(LexErrorKind::InvalidEscape(_)) => ErrorCode::E0004,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedParen => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::DuplicateDefinition { .. } => ErrorCode::E1005,
        }
    }

    /// Convert to a diagnostic located in `file`, whose text is `source`.
    pub fn to_diagnostic(&self, source: &str, file: &str) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_file(file)
            .with_line(self.span.line_in(source))
            .with_span(self.span)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}

/// Non-fatal findings. These never block output.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("doc comment is not followed by a definition")]
    DanglingDocComment { span: Span },
}

impl ParseWarning {
    pub fn to_diagnostic(&self, source: &str, file: &str) -> Diagnostic {
        match self {
            ParseWarning::DanglingDocComment { span } => Diagnostic::warning(ErrorCode::E1006)
                .with_message(self.to_string())
                .with_file(file)
                .with_line(span.line_in(source))
                .with_span(*span),
        }
    }
}
