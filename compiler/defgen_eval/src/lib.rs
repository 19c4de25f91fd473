//! Macro evaluation for defgen.
//!
//! Resolves every macro of a [`MacroTable`](defgen_ir::MacroTable) to a
//! [`Value`]. One pass shares a cache across all entries, so a name that many
//! macros reference is evaluated once. Cycles are detected when a name is
//! met again while it is still being resolved.
//!
//! ```text
//! let outcome = evaluate_all(&table);
//! for failure in &outcome.failures {
//!     eprintln!("{}", failure.to_diagnostic());
//! }
//! let entries = outcome.printable(&table);
//! ```
//!
//! Every failure is attributed to the top-level macro being evaluated; the
//! message still names the inner identifier that caused it.

mod diagnostics;
mod errors;
mod evaluator;
mod exec;
mod operators;
mod unary_operators;
mod value;

pub use diagnostics::EvalCounters;
pub use errors::{
    circular_reference, division_by_zero, integer_overflow, invalid_shift, type_mismatch,
    undefined_reference, EvalError, EvalErrorKind, EvalResult,
};
pub use evaluator::{evaluate_all, EvalOutcome, Evaluator, MacroFailure, ResolvedEntry};
pub use exec::{evaluate_expr, Resolve};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::{Value, ValueKind};

#[cfg(test)]
mod tests;
