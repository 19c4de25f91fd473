//! Whole-table evaluation.
//!
//! One [`Evaluator`] performs one pass over a [`MacroTable`]. It owns the
//! pass cache: every name is either absent, in progress (on the resolution
//! stack right now) or done. Meeting an in-progress name again is a cycle.
//!
//! Failures are not cached. A failed name has its marker removed, so a later
//! entry that needs it evaluates it again and reports its own failure rather
//! than a bogus cycle.

use std::collections::BTreeMap;
use std::fmt;

use defgen_diagnostic::Diagnostic;
use defgen_ir::{MacroTable, Name};
use defgen_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::diagnostics::EvalCounters;
use crate::errors::{circular_reference, undefined_reference, EvalError, EvalResult};
use crate::exec::{evaluate_expr, Resolve};
use crate::value::Value;

/// Cache state of one name during a pass.
#[derive(Clone, Debug)]
enum Slot {
    InProgress,
    Done(Value),
}

/// A top-level macro that could not be evaluated.
///
/// `name` is the entry being evaluated, which is not necessarily the name
/// that broke: `A = B + 1` with `B` undefined fails as `A`, and the error
/// message names `B`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroFailure {
    pub name: Name,
    pub error: EvalError,
}

impl MacroFailure {
    /// One line, however deep the failing name sits below `name`.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.error.code()).with_message(self.to_string())
    }
}

impl fmt::Display for MacroFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "macro `{}`: {}", self.name, self.error)
    }
}

impl std::error::Error for MacroFailure {}

/// A successfully evaluated, printable macro, ready for the emitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub name: Name,
    pub comment: String,
    /// Literal text of the value.
    pub text: String,
}

/// Result of a full pass.
#[derive(Clone, Debug, Default)]
pub struct EvalOutcome {
    pub values: BTreeMap<Name, Value>,
    /// In name order.
    pub failures: Vec<MacroFailure>,
    pub counters: EvalCounters,
}

impl EvalOutcome {
    /// Entries to emit: evaluated successfully and marked for printing, in
    /// name order.
    pub fn printable(&self, table: &MacroTable) -> Vec<ResolvedEntry> {
        table
            .iter()
            .filter(|entry| entry.print)
            .filter_map(|entry| {
                self.values.get(&entry.name).map(|value| ResolvedEntry {
                    name: entry.name.clone(),
                    comment: entry.comment.clone(),
                    text: value.to_string(),
                })
            })
            .collect()
    }
}

/// Evaluates the macros of one table, sharing a cache across the pass.
pub struct Evaluator<'t> {
    table: &'t MacroTable,
    cache: FxHashMap<Name, Slot>,
    /// Names currently being resolved, outermost first.
    stack: Vec<Name>,
    counters: EvalCounters,
}

impl<'t> Evaluator<'t> {
    pub fn new(table: &'t MacroTable) -> Self {
        Evaluator {
            table,
            cache: FxHashMap::default(),
            stack: Vec::new(),
            counters: EvalCounters::default(),
        }
    }

    /// Evaluate one top-level entry.
    ///
    /// Anything already computed in this pass is reused. A failure is
    /// attributed to `name`.
    pub fn evaluate(&mut self, name: &Name) -> Result<Value, MacroFailure> {
        debug_assert!(self.stack.is_empty(), "evaluate is not re-entrant");
        self.resolve(name).map_err(|error| {
            tracing::debug!(%name, %error, "macro failed");
            MacroFailure {
                name: name.clone(),
                error,
            }
        })
    }

    /// Evaluate every entry of the table, in name order.
    ///
    /// Failures never stop the pass; every entry gets a value or a failure.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = self.table.len()))]
    pub fn evaluate_all(mut self) -> EvalOutcome {
        let mut values = BTreeMap::new();
        let mut failures = Vec::new();

        let table = self.table;
        for name in table.names() {
            match self.evaluate(name) {
                Ok(value) => {
                    values.insert(name.clone(), value);
                }
                Err(failure) => failures.push(failure),
            }
        }

        tracing::debug!(
            values = values.len(),
            failures = failures.len(),
            evaluations = self.counters.evaluations,
            "pass complete"
        );

        EvalOutcome {
            values,
            failures,
            counters: self.counters,
        }
    }

    /// `A -> B -> A` for a reference back to `name`.
    fn cycle_chain(&self, name: &Name) -> Vec<Name> {
        let start = self.stack.iter().position(|n| n == name).unwrap_or(0);
        let mut chain = self.stack[start..].to_vec();
        chain.push(name.clone());
        chain
    }
}

impl Resolve for Evaluator<'_> {
    fn resolve(&mut self, name: &Name) -> EvalResult {
        match self.cache.get(name) {
            Some(Slot::Done(value)) => {
                self.counters.count_cache_hit();
                return Ok(value.clone());
            }
            Some(Slot::InProgress) => {
                return Err(circular_reference(name, self.cycle_chain(name)));
            }
            None => {}
        }

        let table = self.table;
        let Some(expr) = table.expr(name.as_str()) else {
            return Err(undefined_reference(name));
        };

        tracing::trace!(%name, depth = self.stack.len(), "resolving");
        self.cache.insert(name.clone(), Slot::InProgress);
        self.stack.push(name.clone());
        self.counters.count_evaluation();

        let result = ensure_sufficient_stack(|| evaluate_expr(expr, self));

        self.stack.pop();
        match result {
            Ok(value) => {
                self.cache.insert(name.clone(), Slot::Done(value.clone()));
                Ok(value)
            }
            Err(error) => {
                self.cache.remove(name);
                Err(error)
            }
        }
    }
}

/// Evaluate every entry of `table` in a fresh pass.
pub fn evaluate_all(table: &MacroTable) -> EvalOutcome {
    Evaluator::new(table).evaluate_all()
}
