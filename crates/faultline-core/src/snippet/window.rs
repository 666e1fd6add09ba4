//! Line-range arithmetic for snippets
//!
//! All line numbers here are 1-indexed and inclusive, matching `Span`.

use crate::model::Span;
use crate::options::RenderOptions;

/// An inclusive range of 1-indexed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    pub start: usize,
    pub end: usize,
}

/// Smallest `max_target_lines` that still leaves room for one head line plus the marker
const MIN_TARGET_LINES: usize = 2;

/// Last line of the span that exists in a file of `line_count` lines
pub fn visible_end(span: &Span, line_count: usize) -> usize {
    span.line_end().min(line_count)
}

/// Last target line to display
///
/// Only lines present in the file count toward the span's length. A span
/// longer than `max_target_lines` is cut so that the head plus the
/// "[N more lines]" marker fit in the budget; the marker always stands for
/// at least two lines.
pub fn target_cut(span: &Span, line_count: usize, max_target_lines: usize) -> usize {
    let max_target_lines = max_target_lines.max(MIN_TARGET_LINES);
    let end = visible_end(span, line_count);
    if end.saturating_sub(span.line_start()) + 1 > max_target_lines {
        span.line_start() + max_target_lines - 2
    } else {
        end
    }
}

/// Context window around a span, clamped to the file
pub fn context_window(span: &Span, line_count: usize, options: &RenderOptions) -> LineWindow {
    LineWindow {
        start: span
            .line_start()
            .saturating_sub(options.max_context_lines_before)
            .max(1),
        end: span
            .line_end()
            .saturating_add(options.max_context_lines_after)
            .min(line_count),
    }
}

/// Shrink a window inward while its context boundary lines are blank
///
/// Only context lines are dropped; the walk never crosses into the span.
/// Applying it to an already trimmed window is a no-op.
pub fn trim_blank_boundaries(window: LineWindow, span: &Span, lines: &[String]) -> LineWindow {
    let is_blank = |number: usize| lines.get(number - 1).map_or(true, |l| l.trim().is_empty());

    let mut trimmed = window;
    while trimmed.start < span.line_start() && is_blank(trimmed.start) {
        trimmed.start += 1;
    }
    while trimmed.end > span.line_end() && is_blank(trimmed.end) {
        trimmed.end -= 1;
    }
    trimmed
}

/// Leading whitespace width of a line, in characters
pub fn indentation(line: &str) -> usize {
    line.chars().count() - line.trim_start().chars().count()
}

/// Smallest indentation among non-blank lines; 0 when every line is blank
pub fn common_indentation<'a, I>(lines: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(indentation)
        .min()
        .unwrap_or(0)
}

/// Decimal width of a line number
pub fn integer_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(line_start: usize, line_end: usize) -> Span {
        Span::new(line_start, line_end, 0, 0).unwrap()
    }

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_target_cut_short_span_is_untouched() {
        assert_eq!(target_cut(&span(4, 8), 20, 5), 8);
    }

    #[test]
    fn test_target_cut_long_span() {
        // 10 lines, budget 5: 4 head lines are shown
        assert_eq!(target_cut(&span(1, 10), 20, 5), 4);
    }

    #[test]
    fn test_target_cut_small_budget_is_raised() {
        assert_eq!(target_cut(&span(3, 9), 20, 0), 3);
    }

    #[test]
    fn test_target_cut_ignores_lines_past_end_of_file() {
        // 6 lines in the span, only 5 in the file: fits the budget
        assert_eq!(target_cut(&span(1, 6), 5, 5), 5);
        assert_eq!(target_cut(&span(2, 3), 2, 5), 2);
    }

    #[test]
    fn test_context_window_saturates_at_huge_span_end() {
        let options = RenderOptions::default();
        assert_eq!(
            context_window(&span(1, usize::MAX), 1, &options),
            LineWindow { start: 1, end: 1 }
        );
    }

    #[test]
    fn test_context_window_clamps() {
        let options = RenderOptions::default();
        assert_eq!(
            context_window(&span(5, 5), 10, &options),
            LineWindow { start: 2, end: 7 }
        );
        assert_eq!(
            context_window(&span(1, 2), 3, &options),
            LineWindow { start: 1, end: 3 }
        );
    }

    #[test]
    fn test_trim_blank_boundaries() {
        let text = lines(&["", "  ", "a = 1", "fail()", "", "b = 2"]);
        let window = LineWindow { start: 1, end: 6 };
        let trimmed = trim_blank_boundaries(window, &span(4, 4), &text);

        assert_eq!(trimmed, LineWindow { start: 3, end: 6 });
    }

    #[test]
    fn test_trim_stops_at_target() {
        let text = lines(&["", "", "", "", ""]);
        let window = LineWindow { start: 1, end: 5 };
        let trimmed = trim_blank_boundaries(window, &span(3, 3), &text);

        assert_eq!(trimmed, LineWindow { start: 3, end: 3 });
    }

    #[test]
    fn test_common_indentation_ignores_blank_lines() {
        let text = ["    a", "", "      b", "  "];
        assert_eq!(common_indentation(text), 4);
        assert_eq!(common_indentation(["", " "]), 0);
    }

    #[test]
    fn test_integer_width() {
        assert_eq!(integer_width(0), 1);
        assert_eq!(integer_width(9), 1);
        assert_eq!(integer_width(10), 2);
        assert_eq!(integer_width(999), 3);
        assert_eq!(integer_width(1000), 4);
    }
}
