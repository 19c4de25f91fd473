//! Lexer for defgen definition files, built on logos.
//!
//! Two layers:
//! - `RawToken` (logos) recognizes the shape of each token;
//! - [`lex`] cooks raw tokens into [`Token`]s: integer values, unescaped
//!   strings, identifier `Name`s and doc-comment text.
//!
//! Ordinary comments and line continuations never reach the parser. A doc
//! comment (`///`) is only meaningful at the start of a line; a trailing one
//! is treated as an ordinary comment.

mod cook_escape;
mod lex_error;
mod parse_helpers;
mod raw_token;

use std::fmt;

use defgen_ir::{Name, Span};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Token kinds after cooking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `/// text` at the start of a line; holds `text`.
    DocComment(String),
    Newline,

    // Keywords
    Define,
    Hidden,
    Verbatim,

    // Literals and names
    Int(i64),
    Str(String),
    Ident(Name),

    // Delimiters
    LParen,
    RParen,
    Eq,

    // Operators
    Hash,
    EqEq,
    NotEq,
    Shl,
    Shr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Tilde,
    AmpAmp,
    Amp,
    PipePipe,
    Pipe,
    Caret,

    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::DocComment(_) => "doc comment".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Define => "`define`".to_string(),
            TokenKind::Hidden => "`hidden`".to_string(),
            TokenKind::Verbatim => "`verbatim`".to_string(),
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Source text of punctuation tokens; empty for the rest.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eq => "=",
            TokenKind::Hash => "#",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::AmpAmp => "&&",
            TokenKind::Amp => "&",
            TokenKind::PipePipe => "||",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            _ => "",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A cooked token with its source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Result of lexing one source file.
///
/// `tokens` always ends with `Eof`. Errors do not stop lexing; the bad
/// region is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Tokenize a definitions source.
pub fn lex(source: &str) -> LexOutput {
    let mut out = LexOutput::default();
    let mut lexer = RawToken::lexer(source);
    let mut at_line_start = true;

    while let Some(raw) = lexer.next() {
        let range = lexer.span();
        let span = Span::from_range(range.clone());
        let slice = lexer.slice();

        let kind = match raw {
            Err(()) => {
                out.errors.push(classify_error(slice, span));
                continue;
            }
            Ok(RawToken::LineComment | RawToken::LineContinuation) => continue,
            Ok(RawToken::DocComment) => {
                if !at_line_start {
                    continue;
                }
                let text = slice[3..].trim_end_matches('\r');
                TokenKind::DocComment(text.strip_prefix(' ').unwrap_or(text).to_string())
            }
            Ok(RawToken::UnterminatedString) => {
                out.errors.push(LexError::new(LexErrorKind::UnterminatedString, span));
                // Keep the text so the parser does not report the line again
                TokenKind::Str(slice[1..].to_string())
            }
            Ok(RawToken::String) => {
                let content = &slice[1..slice.len() - 1];
                TokenKind::Str(cook_escape::unescape_string(
                    content,
                    range.start + 1,
                    &mut out.errors,
                ))
            }
            Ok(RawToken::HexInt(n) | RawToken::BinInt(n) | RawToken::OctInt(n) | RawToken::Int(n)) => {
                TokenKind::Int(n)
            }
            Ok(RawToken::Ident) => TokenKind::Ident(Name::new(slice)),
            Ok(raw) => simple_kind(raw),
        };

        at_line_start = kind == TokenKind::Newline;
        out.tokens.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    out.tokens.push(Token::new(TokenKind::Eof, end));
    out
}

/// Map payload-free raw tokens one to one.
fn simple_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Newline => TokenKind::Newline,
        RawToken::Define => TokenKind::Define,
        RawToken::Hidden => TokenKind::Hidden,
        RawToken::Verbatim => TokenKind::Verbatim,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Hash => TokenKind::Hash,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::Amp => TokenKind::Amp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        // Payload and skipped tokens are cooked by `lex`
        RawToken::DocComment
        | RawToken::LineComment
        | RawToken::LineContinuation
        | RawToken::HexInt(_)
        | RawToken::BinInt(_)
        | RawToken::OctInt(_)
        | RawToken::Int(_)
        | RawToken::String
        | RawToken::UnterminatedString
        | RawToken::Ident => TokenKind::Eof,
    }
}

/// Logos reports both unknown bytes and overflowing integer literals as
/// errors; tell them apart by the slice.
#[cold]
fn classify_error(slice: &str, span: Span) -> LexError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() => {
            LexError::new(LexErrorKind::InvalidNumber(slice.to_string()), span)
        }
        Some(c) => LexError::new(LexErrorKind::InvalidCharacter(c), span),
        None => LexError::new(LexErrorKind::InvalidCharacter('\0'), span),
    }
}
