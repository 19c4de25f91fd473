//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over value pairs. The operator and value sets
//! are closed, so exhaustive matching is used rather than trait objects.

use defgen_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_shift, type_mismatch, EvalResult};
use crate::value::{Value, ValueKind};

// Helpers for the checked arithmetic patterns

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division or remainder with a zero guard.
///
/// `i64::MIN / -1` overflows and is reported as such.
#[inline]
fn checked_div<F>(is_zero: bool, op: F, op_name: &'static str) -> EvalResult
where
    F: FnOnce() -> Option<i64>,
{
    if is_zero {
        Err(division_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Shift with the amount restricted to `0..=63`.
#[inline]
fn checked_shift(value: i64, amount: i64, shift: fn(i64, u32) -> Option<i64>) -> EvalResult {
    u32::try_from(amount)
        .ok()
        .and_then(|n| shift(value, n))
        .map(Value::Int)
        .ok_or_else(|| invalid_shift(amount))
}

/// Equality and ordering. `None` when `op` is not a comparison.
#[inline]
fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T, op: BinaryOp) -> Option<Value> {
    let result = match op {
        BinaryOp::Eq => a == b,
        BinaryOp::NotEq => a != b,
        BinaryOp::Lt => a < b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::GtEq => a >= b,
        _ => return None,
    };
    Some(Value::from(result))
}

// Direct Dispatch Function

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Concat {
        return Ok(concat(left, right));
    }

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_str_binary(a, b, op),
        // Mixed kinds never compare; report the right-hand side
        _ if op.is_comparison() => Err(type_mismatch(op.as_symbol(), right.kind())),
        (Value::Int(_), other) | (other, _) => Err(type_mismatch(op.as_symbol(), other.kind())),
    }
}

/// `#` joins the literal text of both sides.
fn concat(left: Value, right: Value) -> Value {
    let mut text = left.into_text();
    match right {
        Value::Int(n) => text.push_str(&n.to_string()),
        Value::Str(s) => text.push_str(&s),
    }
    Value::Str(text)
}

/// Integer operations.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), "division"),
        BinaryOp::Mod => checked_div(b == 0, || a.checked_rem(b), "remainder"),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Shl => checked_shift(a, b, i64::checked_shl),
        BinaryOp::Shr => checked_shift(a, b, i64::checked_shr),
        BinaryOp::And => Ok(Value::from(a != 0 && b != 0)),
        BinaryOp::Or => Ok(Value::from(a != 0 || b != 0)),
        _ => compare(&a, &b, op).ok_or_else(|| type_mismatch(op.as_symbol(), ValueKind::Int)),
    }
}

/// String operations: comparisons only.
fn eval_str_binary(a: &str, b: &str, op: BinaryOp) -> EvalResult {
    compare(a, b, op).ok_or_else(|| type_mismatch(op.as_symbol(), ValueKind::Str))
}
