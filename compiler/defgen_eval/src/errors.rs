//! Evaluation errors.
//!
//! `EvalErrorKind` is the typed category; factory functions
//! (`division_by_zero()` and friends) are the construction API.

use std::fmt;

use defgen_diagnostic::ErrorCode;
use defgen_ir::Name;

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // References
    UndefinedReference {
        name: Name,
    },
    /// `chain` starts and ends with `name`, e.g. `A -> B -> A`.
    CircularReference {
        name: Name,
        chain: Vec<Name>,
    },

    // Operators
    TypeMismatch {
        op: &'static str,
        kind: ValueKind,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    InvalidShift {
        amount: i64,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedReference { .. } => ErrorCode::E2001,
            Self::CircularReference { .. } => ErrorCode::E2002,
            Self::TypeMismatch { .. } => ErrorCode::E2003,
            Self::DivisionByZero => ErrorCode::E2004,
            Self::IntegerOverflow { .. } => ErrorCode::E2005,
            Self::InvalidShift { .. } => ErrorCode::E2006,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedReference { name } => write!(f, "undefined reference to `{name}`"),
            Self::CircularReference { name, chain } => {
                write!(f, "circular reference to `{name}`")?;
                if !chain.is_empty() {
                    write!(f, " ({})", join_chain(chain))?;
                }
                Ok(())
            }
            Self::TypeMismatch { op, kind } => {
                write!(f, "operator `{op}` cannot be applied to {kind}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::InvalidShift { amount } => {
                write!(f, "shift amount {amount} is outside 0..=63")
            }
        }
    }
}

/// Render names as `A -> B -> C`.
pub(crate) fn join_chain(names: &[Name]) -> String {
    names
        .iter()
        .map(Name::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Factory functions

#[cold]
pub fn undefined_reference(name: &Name) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedReference { name: name.clone() })
}

#[cold]
pub fn circular_reference(name: &Name, chain: Vec<Name>) -> EvalError {
    EvalError::new(EvalErrorKind::CircularReference {
        name: name.clone(),
        chain,
    })
}

#[cold]
pub fn type_mismatch(op: &'static str, kind: ValueKind) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch { op, kind })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn invalid_shift(amount: i64) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidShift { amount })
}
