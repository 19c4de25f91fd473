//! Defgen IR - Expression and Macro Table Types
//!
//! This crate contains the data structures shared by every stage of defgen:
//! - Spans for source locations
//! - Names for macro identifiers
//! - Expression trees (`Expr`) and their operators
//! - The macro table handed from the parser to the evaluator and emitter
//!
//! # Design Philosophy
//!
//! - **Closed node set**: `Expr` is an enum, evaluation is one exhaustive match
//! - **Owned trees**: each `MacroEntry` owns its `Expr`; the table owns the entries
//! - **Sorted table**: iteration is always by name, so output is deterministic

pub mod ast;
mod name;
mod span;
mod table;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use name::Name;
pub use span::Span;
pub use table::{DuplicateDefinition, MacroEntry, MacroTable};
