//! Evaluation profiling.

/// Counters for `--profile`.
///
/// `evaluations` counts how many macro bodies were evaluated. With
/// memoization each defined name is evaluated at most once per successful
/// pass, however many references point at it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalCounters {
    pub evaluations: u64,
    pub cache_hits: u64,
}

impl EvalCounters {
    #[inline]
    pub fn count_evaluation(&mut self) {
        self.evaluations = self.evaluations.wrapping_add(1);
    }

    #[inline]
    pub fn count_cache_hit(&mut self) {
        self.cache_hits = self.cache_hits.wrapping_add(1);
    }

    /// Format a summary report.
    pub fn report(&self) -> String {
        format!(
            "Evaluation profile:\n  \
             Macros evaluated: {}\n  \
             Cache hits:       {}",
            self.evaluations, self.cache_hits,
        )
    }
}
