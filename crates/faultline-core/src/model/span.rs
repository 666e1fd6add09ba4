use serde::{Deserialize, Serialize};

use crate::errors::{FaultlineError, Result};

/// A line/column range identifying the source text implicated by a frame
///
/// Lines are 1-indexed and inclusive; columns are 0-indexed character
/// offsets with an exclusive end. The ordering invariant is checked on
/// construction, including deserialization, so every `Span` in a
/// `FailureNode` is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpan", into = "RawSpan")]
pub struct Span {
    line_start: usize,
    line_end: usize,
    col_start: usize,
    col_end: usize,
}

impl Span {
    /// Create a span, rejecting line 0 and ranges whose ends are out of order
    ///
    /// # Errors
    /// * `MalformedSpan` - `line_start == 0`, `line_start > line_end`, or a
    ///   single-line span with `col_start > col_end`
    pub fn new(
        line_start: usize,
        line_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> Result<Self> {
        let ordered = line_start >= 1
            && line_start <= line_end
            && (line_start != line_end || col_start <= col_end);
        if !ordered {
            return Err(FaultlineError::MalformedSpan {
                line_start,
                line_end,
                col_start,
                col_end,
            });
        }

        Ok(Self {
            line_start,
            line_end,
            col_start,
            col_end,
        })
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn line_end(&self) -> usize {
        self.line_end
    }

    pub fn col_start(&self) -> usize {
        self.col_start
    }

    pub fn col_end(&self) -> usize {
        self.col_end
    }

    /// Number of lines covered by the span
    pub fn line_count(&self) -> usize {
        (self.line_end - self.line_start).saturating_add(1)
    }

    pub fn is_single_line(&self) -> bool {
        self.line_start == self.line_end
    }
}

#[derive(Serialize, Deserialize)]
struct RawSpan {
    line_start: usize,
    line_end: usize,
    col_start: usize,
    col_end: usize,
}

impl TryFrom<RawSpan> for Span {
    type Error = FaultlineError;

    fn try_from(raw: RawSpan) -> Result<Self> {
        Span::new(raw.line_start, raw.line_end, raw.col_start, raw.col_end)
    }
}

impl From<Span> for RawSpan {
    fn from(span: Span) -> Self {
        RawSpan {
            line_start: span.line_start,
            line_end: span.line_end,
            col_start: span.col_start,
            col_end: span.col_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_span() {
        let span = Span::new(5, 5, 2, 7).unwrap();
        assert!(span.is_single_line());
        assert_eq!(span.line_count(), 1);
    }

    #[test]
    fn test_multi_line_span_allows_any_columns() {
        let span = Span::new(3, 6, 10, 2).unwrap();
        assert!(!span.is_single_line());
        assert_eq!(span.line_count(), 4);
    }

    #[test]
    fn test_reversed_lines_rejected() {
        let err = Span::new(6, 3, 0, 0).unwrap_err();
        assert!(matches!(err, FaultlineError::MalformedSpan { line_start: 6, .. }));
    }

    #[test]
    fn test_reversed_columns_on_single_line_rejected() {
        assert!(Span::new(4, 4, 9, 2).is_err());
    }

    #[test]
    fn test_line_zero_rejected() {
        let err = Span::new(0, 0, 0, 1).unwrap_err();
        assert!(matches!(err, FaultlineError::MalformedSpan { line_start: 0, .. }));

        let json = r#"{"line_start": 0, "line_end": 0, "col_start": 0, "col_end": 1}"#;
        let result: std::result::Result<Span, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_line_count_of_widest_span() {
        assert_eq!(Span::new(1, usize::MAX, 0, 1).unwrap().line_count(), usize::MAX);
    }

    #[test]
    fn test_deserialize_rejects_malformed_span() {
        let json = r#"{"line_start": 9, "line_end": 2, "col_start": 0, "col_end": 1}"#;
        let result: std::result::Result<Span, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
