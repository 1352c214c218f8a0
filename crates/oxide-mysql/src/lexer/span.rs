//! Source location tracking for tokens and AST nodes.

/// A half-open byte range `[start, end)` into the parsed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// An empty span at offset zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Returns the source text covered by this span.
    ///
    /// Out-of-range or non-boundary spans yield an empty string rather than
    /// panicking.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }

    /// Returns the 1-based `(line, column)` of the span start in `source`.
    ///
    /// Columns count bytes, matching how MySQL reports positions.
    #[must_use]
    pub fn line_col(self, source: &str) -> (usize, usize) {
        let upto = &source.as_bytes()[..self.start.min(source.len())];
        let line = upto.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = upto
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        (line, upto.len() - line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::ZERO.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(5, 10).merge(Span::new(8, 15));
        assert_eq!(merged, Span::new(5, 15));
    }

    #[test]
    fn test_span_slice() {
        let sql = "SELECT 1";
        assert_eq!(Span::new(0, 6).slice(sql), "SELECT");
        assert_eq!(Span::new(4, 40).slice(sql), "");
    }

    #[test]
    fn test_line_col() {
        let sql = "SELECT 1;\nSELECT x FROM";
        assert_eq!(Span::new(0, 1).line_col(sql), (1, 1));
        assert_eq!(Span::new(17, 18).line_col(sql), (2, 8));
    }
}
