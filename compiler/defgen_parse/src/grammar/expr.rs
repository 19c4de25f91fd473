//! Expression parsing.
//!
//! Binary operators use precedence climbing over `BinaryOp::precedence`
//! (level 3 binds tightest, `BinaryOp::LOWEST_PRECEDENCE` loosest). Every
//! level is left-associative. Unary operators bind tighter than any binary
//! operator.

use defgen_ir::{BinaryOp, Expr, UnaryOp};
use defgen_lexer::TokenKind;
use defgen_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// Tightest binary precedence level.
const HIGHEST_PRECEDENCE: u8 = 3;

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::Hash => BinaryOp::Concat,
        TokenKind::Shl => BinaryOp::Shl,
        TokenKind::Shr => BinaryOp::Shr,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Amp => BinaryOp::BitAnd,
        TokenKind::Caret => BinaryOp::BitXor,
        TokenKind::Pipe => BinaryOp::BitOr,
        TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::PipePipe => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Tilde => Some(UnaryOp::BitNot),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply parenthesized input cannot
    /// overflow the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_binary(BinaryOp::LOWEST_PRECEDENCE))
    }

    /// Parse a left-associative chain of operators at `level`.
    fn parse_binary(&mut self, level: u8) -> Result<Expr, ParseError> {
        if level < HIGHEST_PRECEDENCE {
            return self.parse_unary();
        }

        let mut left = self.parse_binary(level - 1)?;

        while let Some(op) = binary_op(self.cursor.current_kind()) {
            if op.precedence() != level {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(level - 1)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse unary operators.
    ///
    /// `-` directly before an integer literal folds into a negative literal.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = unary_op(self.cursor.current_kind()) else {
            return self.parse_primary();
        };
        self.cursor.advance();

        if op == UnaryOp::Neg {
            if let TokenKind::Int(n) = self.cursor.current_kind() {
                self.cursor.advance();
                // Lexed literals are non-negative, so this cannot overflow
                return Ok(Expr::Int(-n));
            }
        }

        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Expr::unary(op, operand))
    }

    /// Literals, references and parenthesized expressions.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match &token.kind {
            TokenKind::Int(n) => {
                self.cursor.advance();
                Ok(Expr::Int(*n))
            }
            TokenKind::Str(text) => {
                self.cursor.advance();
                Ok(Expr::Str(text.clone()))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Expr::Ref(name.clone()))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                if !self.cursor.check(&TokenKind::RParen) {
                    return Err(ParseError::new(ParseErrorKind::UnclosedParen, token.span));
                }
                self.cursor.advance();
                Ok(inner)
            }
            other => Err(ParseError::new(
                ParseErrorKind::ExpectedExpression {
                    found: other.describe(),
                },
                token.span,
            )),
        }
    }
}
