//! Evaluator tests, grouped by the module they exercise.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

mod operators_tests;

use defgen_ir::{Expr, MacroEntry, MacroTable};

/// Build a table of printable entries.
fn table(defs: Vec<(&str, Expr)>) -> MacroTable {
    table_of(defs.into_iter().map(|(name, expr)| MacroEntry::new(name, expr)))
}

/// Build a table from entries with distinct names.
fn table_of(entries: impl IntoIterator<Item = MacroEntry>) -> MacroTable {
    let mut table = MacroTable::new();
    for entry in entries {
        table.insert(entry).unwrap();
    }
    table
}
