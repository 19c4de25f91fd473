//! Token cursor for navigating the token stream.

use defgen_ir::Span;
use defgen_lexer::{Token, TokenKind};

/// Cursor over a cooked token list.
///
/// Invariant: the list is non-empty and ends with `Eof`; the cursor never
/// moves past it.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(Token { kind: TokenKind::Eof, .. })),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current token.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub(crate) fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span,
            None => self.current_span(),
        }
    }

    /// Check if current token matches the given kind.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// True at a newline or end of file.
    #[inline]
    pub(crate) fn at_line_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Newline | TokenKind::Eof)
    }

    /// Consume the current token. Stays put at `Eof`.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume tokens up to and including the next newline.
    pub(crate) fn skip_line(&mut self) {
        while !self.is_at_end() {
            if self.advance().kind == TokenKind::Newline {
                break;
            }
        }
    }
}
