//! Expression trees.
//!
//! An `Expr` is the parse result of one macro body. Trees are acyclic by
//! construction; cycles can only form across macros through `Expr::Ref`.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use std::fmt;

use crate::Name;

/// One node of a macro expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal.
    Int(i64),
    /// String literal, already unescaped.
    Str(String),
    /// Reference to another macro by name.
    Ref(Name),
    /// Prefix operator application.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Infix operator application. Operands evaluate left to right.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Build a reference node.
    pub fn reference(name: impl Into<Name>) -> Self {
        Expr::Ref(name.into())
    }

    /// Build a string literal node.
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Str(text.into())
    }

    /// Build a unary node.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build a binary node.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

}

/// Renders a fully parenthesized form, used in trace logs and test failures.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Str(s) => write!(f, "{s:?}"),
            Expr::Ref(name) => write!(f, "{name}"),
            Expr::Unary { op, operand } => write!(f, "{}{operand}", op.as_symbol()),
            Expr::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
        }
    }
}
