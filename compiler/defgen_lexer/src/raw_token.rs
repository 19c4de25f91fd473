//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! escapes are cooked and identifiers become `Name`s.

use logos::Logos;

use crate::parse_helpers::parse_int_skip_underscores;

/// Raw token from logos.
///
/// Integer callbacks return `None` on overflow, which logos reports as an
/// error token covering the literal.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"///[^\n]*")]
    DocComment,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t]*\r?\n")]
    LineContinuation,

    #[token("define")]
    Define,
    #[token("hidden")]
    Hidden,
    #[token("verbatim")]
    Verbatim,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("#")]
    Hash,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("&")]
    Amp,
    #[token("||")]
    PipePipe,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // Hex integer
    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*", |lex| {
        parse_int_skip_underscores(&lex.slice()[2..], 16)
    })]
    HexInt(i64),

    // Binary integer
    #[regex(r"0b[01][01_]*", |lex| {
        parse_int_skip_underscores(&lex.slice()[2..], 2)
    })]
    BinInt(i64),

    // Octal integer
    #[regex(r"0o[0-7][0-7_]*", |lex| {
        parse_int_skip_underscores(&lex.slice()[2..], 8)
    })]
    OctInt(i64),

    // Decimal integer
    #[regex(r"[0-9][0-9_]*", |lex| {
        parse_int_skip_underscores(lex.slice(), 10)
    })]
    Int(i64),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // String literal missing its closing quote before end of line
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedString,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
