//! Expression evaluation.
//!
//! [`evaluate_expr`] walks one expression tree. Everything it needs from the
//! outside world is the value of other macros, which it asks for through
//! [`Resolve`]. The [`Evaluator`](crate::Evaluator) is the real resolver;
//! tests plug in plain maps.

use defgen_ir::{Expr, Name};
use defgen_stack::ensure_sufficient_stack;

use crate::errors::EvalResult;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

/// Source of values for macro references.
pub trait Resolve {
    /// Value of macro `name`.
    ///
    /// Fails with `UndefinedReference` when `name` is unknown and with
    /// `CircularReference` when `name` is already being resolved.
    fn resolve(&mut self, name: &Name) -> EvalResult;
}

/// Evaluate `expr`, resolving references through `ctx`.
///
/// Operands are evaluated left to right, both sides always. Errors from
/// `ctx` propagate unchanged.
pub fn evaluate_expr<R: Resolve + ?Sized>(expr: &Expr, ctx: &mut R) -> EvalResult {
    match expr {
        Expr::Int(n) => Ok(Value::Int(*n)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Ref(name) => ctx.resolve(name),
        Expr::Unary { op, operand } => {
            let value = ensure_sufficient_stack(|| evaluate_expr(operand, ctx))?;
            evaluate_unary(value, *op)
        }
        Expr::Binary { op, left, right } => {
            let lhs = ensure_sufficient_stack(|| evaluate_expr(left, ctx))?;
            let rhs = ensure_sufficient_stack(|| evaluate_expr(right, ctx))?;
            evaluate_binary(lhs, rhs, *op)
        }
    }
}
