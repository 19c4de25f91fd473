//! Diagnostic system for defgen error reporting.
//!
//! Every failure a user can see goes through a [`Diagnostic`]:
//! - Error code for searchability
//! - One-line message naming the offending identifier
//! - Optional source location (file line) for parse errors
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is type-level proof that at least one error was
//! emitted. It can only be obtained from a [`DiagnosticQueue`] that holds
//! an error, so "failed but said nothing" paths do not type-check.

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
