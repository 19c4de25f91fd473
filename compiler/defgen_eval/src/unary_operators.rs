//! Unary operator implementations for the evaluator.

use defgen_ir::UnaryOp;

use crate::errors::{integer_overflow, type_mismatch, EvalResult};
use crate::value::Value;

/// Evaluate a unary operation using direct pattern matching.
#[allow(
    clippy::needless_pass_by_value,
    reason = "Mirrors evaluate_binary, which consumes its operands"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Int(n), UnaryOp::BitNot) => Ok(Value::Int(!n)),
        (Value::Int(n), UnaryOp::Not) => Ok(Value::from(*n == 0)),
        (Value::Str(_), _) => Err(type_mismatch(op.as_symbol(), value.kind())),
    }
}
