//! The macro table: every definition known to one run.
//!
//! Built once by the parser, then read by the evaluator and the emitter.
//! Entries iterate in name order.

use std::collections::BTreeMap;

use crate::{Expr, Name, Span};

/// A single macro definition.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MacroEntry {
    pub name: Name,
    pub expr: Expr,
    /// Whether a directive is emitted for this macro.
    ///
    /// Hidden macros are still evaluated so others can reference them.
    pub print: bool,
    /// Free-form comment text attached verbatim to the directive.
    pub comment: String,
    /// Where the definition was written.
    pub span: Span,
}

impl MacroEntry {
    /// Create a printed entry with no comment.
    pub fn new(name: impl Into<Name>, expr: Expr) -> Self {
        MacroEntry {
            name: name.into(),
            expr,
            print: true,
            comment: String::new(),
            span: Span::DUMMY,
        }
    }

    /// Set whether this entry is emitted.
    #[must_use]
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Attach comment text.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Attach a source location.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Returned by `MacroTable::insert` when the name is already defined.
///
/// Carries the rejected entry back to the caller so it can be reported.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DuplicateDefinition {
    pub rejected: MacroEntry,
}

/// Name-ordered collection of macro definitions.
#[derive(Clone, Default, Debug)]
pub struct MacroTable {
    entries: BTreeMap<Name, MacroEntry>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Names must be unique; the first definition wins.
    pub fn insert(&mut self, entry: MacroEntry) -> Result<(), DuplicateDefinition> {
        if self.entries.contains_key(&entry.name) {
            return Err(DuplicateDefinition { rejected: entry });
        }
        self.entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// Look up just the expression for a name.
    #[inline]
    pub fn expr(&self, name: &str) -> Option<&Expr> {
        self.entries.get(name).map(|entry| &entry.expr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MacroEntry> {
        self.entries.values()
    }

    /// All names in order. This is all undefine mode needs.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a MacroTable {
    type Item = &'a MacroEntry;
    type IntoIter = std::collections::btree_map::Values<'a, Name, MacroEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
