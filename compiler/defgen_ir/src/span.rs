//! Source location spans.

use std::fmt;

/// Source location span.
///
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for generated entries.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range, saturating offsets past `u32::MAX`.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        Span { start, end }
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// 1-based line number of `self.start` within `source`.
    pub fn line_in(&self, source: &str) -> u32 {
        let end = (self.start as usize).min(source.len());
        let newlines = source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count();
        u32::try_from(newlines).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_range() {
        assert_eq!(Span::from_range(10..20), Span::new(10, 20));
        assert_eq!(Span::from_range(0..usize::MAX), Span::new(0, u32::MAX));
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(10, 20).merge(Span::new(15, 30));
        assert_eq!(merged, Span::new(10, 30));
    }

    #[test]
    fn test_line_in() {
        let source = "define A = 1\ndefine B = 2\n\ndefine C = 3\n";
        assert_eq!(Span::new(0, 6).line_in(source), 1);
        assert_eq!(Span::new(13, 19).line_in(source), 2);
        assert_eq!(Span::new(27, 33).line_in(source), 4);
    }

    #[test]
    fn test_line_in_past_end() {
        assert_eq!(Span::new(500, 501).line_in("a\nb"), 2);
    }
}
