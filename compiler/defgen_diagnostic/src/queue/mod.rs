//! Diagnostic queue for collecting and counting diagnostics.
//!
//! Features:
//! - Exact-duplicate suppression
//! - `ErrorGuaranteed` proof that errors were emitted
//! - The `Found N errors.` summary line

use crate::{Diagnostic, ErrorGuaranteed};

/// Queue for collecting diagnostics in report order.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.emit_error(diagnostic);
/// for diag in queue.flush() { eprintln!("{diag}"); }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings).
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if it duplicates
    /// one already queued.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.diagnostics.contains(&diag) {
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Emit an error diagnostic and get proof it was emitted.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        debug_assert!(diag.is_error(), "emit_error called with a non-error diagnostic");
        self.add(diag);
        ErrorGuaranteed::new()
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Borrow the queued diagnostics without draining them.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The closing summary line, or `None` when no error was reported.
    ///
    /// `Found 1 error.` / `Found 3 errors.`
    pub fn summary(&self) -> Option<String> {
        match self.error_count {
            0 => None,
            1 => Some("Found 1 error.".to_string()),
            n => Some(format!("Found {n} errors.")),
        }
    }

    /// Return the queued diagnostics in the order they were added.
    ///
    /// Clears the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
