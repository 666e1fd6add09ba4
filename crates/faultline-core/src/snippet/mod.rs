//! Snippet builder
//!
//! Turns a frame's span plus the lines of its file into a highlighted
//! excerpt: dimmed context above and below, target lines with caret anchors,
//! and a truncation count when the span is too long to show in full.

pub mod window;

use crate::classify::ClassifiedFrame;
use crate::model::Span;
use crate::options::RenderOptions;

pub use window::LineWindow;
use window::{
    common_indentation, context_window, indentation, integer_width, target_cut,
    trim_blank_boundaries, visible_end,
};

/// Highlighted column range on a displayed line (end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub start: usize,
    pub end: usize,
}

impl Anchor {
    /// Create an anchor; an end before the start collapses to zero width
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Shift left by `amount` columns, flooring at 0
    fn dedent(self, amount: usize) -> Self {
        Self::new(
            self.start.saturating_sub(amount),
            self.end.saturating_sub(amount),
        )
    }
}

/// A numbered source line, with the common indentation already removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLine {
    pub number: usize,
    pub text: String,
}

/// A numbered line of the failing span with its highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLine {
    pub number: usize,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub context_before: Vec<SnippetLine>,
    pub target: Vec<TargetLine>,
    pub context_after: Vec<SnippetLine>,
    /// Target lines hidden behind the "[N more lines]" marker
    pub truncated_count: usize,
    /// Columns removed from the front of every displayed line
    pub common_indent: usize,
    /// Width of the line-number gutter
    pub line_number_width: usize,
}

/// Build the snippet for a classified frame
///
/// # Returns
/// `None` when the frame is not selected for full display, its source is
/// unavailable, or it has no span.
pub fn build(
    classified: &ClassifiedFrame<'_>,
    selected: bool,
    lines: Option<&[String]>,
    options: &RenderOptions,
) -> Option<Snippet> {
    if !selected {
        return None;
    }
    build_for_span(&classified.frame.span?, lines?, options)
}

/// Build a snippet for a span within the given file lines
///
/// Returns `None` when the span starts past the end of the file.
pub fn build_for_span(span: &Span, lines: &[String], options: &RenderOptions) -> Option<Snippet> {
    if span.line_start() > lines.len() {
        return None;
    }

    let line_end_cut = target_cut(span, lines.len(), options.max_target_lines);
    let window = trim_blank_boundaries(context_window(span, lines.len(), options), span, lines);

    let line = move |number: usize| lines[number - 1].as_str();
    let before = window.start..span.line_start();
    let target = span.line_start()..=line_end_cut;
    let after = span.line_end().saturating_add(1)..=window.end;

    let common_indent = if options.remove_common_indentation {
        common_indentation(
            before
                .clone()
                .chain(target.clone())
                .chain(after.clone())
                .map(line),
        )
    } else {
        0
    };

    let target_lines = target
        .map(|number| TargetLine {
            number,
            text: dedent_text(line(number), common_indent),
            anchor: line_anchor(span, number, line(number), options).dedent(common_indent),
        })
        .collect();

    let last_displayed = window.end.max(line_end_cut);

    Some(Snippet {
        context_before: context_lines(before, lines, common_indent),
        target: target_lines,
        context_after: context_lines(after, lines, common_indent),
        truncated_count: visible_end(span, lines.len()) - line_end_cut,
        common_indent,
        line_number_width: integer_width(last_displayed),
    })
}

fn context_lines(
    numbers: impl Iterator<Item = usize>,
    lines: &[String],
    common_indent: usize,
) -> Vec<SnippetLine> {
    numbers
        .map(|number| SnippetLine {
            number,
            text: dedent_text(&lines[number - 1], common_indent),
        })
        .collect()
}

fn dedent_text(text: &str, common_indent: usize) -> String {
    text.chars().skip(common_indent).collect()
}

/// Highlight for one target line, before indentation removal
///
/// The first line starts at `col_start`; a single-line span ends at
/// `col_end`, a multi-line one runs to the end of the line. The last line of
/// a multi-line span ends at `col_end`; it and interior lines start at their
/// own indentation when `skip_indentation_highlight` is set.
fn line_anchor(span: &Span, number: usize, text: &str, options: &RenderOptions) -> Anchor {
    let line_len = text.chars().count();
    let line_indent = if options.skip_indentation_highlight {
        indentation(text)
    } else {
        0
    };

    if number == span.line_start() {
        let end = if span.is_single_line() {
            span.col_end()
        } else {
            line_len
        };
        Anchor::new(span.col_start(), end)
    } else if number == span.line_end() {
        Anchor::new(line_indent, span.col_end())
    } else {
        Anchor::new(line_indent, line_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::OriginKind;
    use crate::model::Frame;

    fn numbered_file(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("line_{n} = call({n})")).collect()
    }

    fn no_dedent() -> RenderOptions {
        RenderOptions {
            remove_common_indentation: false,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_single_line_span_window_and_anchor() {
        let lines = numbered_file(10);
        let span = Span::new(5, 5, 2, 7).unwrap();
        let snippet = build_for_span(&span, &lines, &RenderOptions::default()).unwrap();

        assert_eq!(snippet.context_before.first().unwrap().number, 2);
        assert_eq!(snippet.context_after.last().unwrap().number, 7);
        assert_eq!(snippet.target.len(), 1);
        assert_eq!(snippet.target[0].anchor, Anchor::new(2, 7));
        assert_eq!(snippet.truncated_count, 0);
        assert_eq!(snippet.line_number_width, 1);
    }

    #[test]
    fn test_long_span_is_truncated() {
        let lines = numbered_file(30);
        let span = Span::new(11, 20, 0, 5).unwrap();
        let snippet = build_for_span(&span, &lines, &RenderOptions::default()).unwrap();

        let numbers: Vec<usize> = snippet.target.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![11, 12, 13, 14]);
        assert_eq!(snippet.truncated_count, 6);
        // Context after the span is still taken from below the real span end
        assert_eq!(snippet.context_after[0].number, 21);
    }

    #[test]
    fn test_multi_line_anchors() {
        let lines: Vec<String> = [
            "def f():",
            "    value = compute(",
            "        a,",
            "        b)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let span = Span::new(2, 4, 12, 10).unwrap();
        let snippet = build_for_span(&span, &lines, &no_dedent()).unwrap();

        assert_eq!(snippet.target[0].anchor, Anchor::new(12, 20));
        assert_eq!(snippet.target[1].anchor, Anchor::new(8, 10));
        assert_eq!(snippet.target[2].anchor, Anchor::new(8, 10));
    }

    #[test]
    fn test_indentation_highlight_can_start_at_column_zero() {
        let lines: Vec<String> = ["x = (", "    1,", "    2)"].iter().map(|s| s.to_string()).collect();
        let options = RenderOptions {
            skip_indentation_highlight: false,
            ..no_dedent()
        };
        let snippet = build_for_span(&Span::new(1, 3, 4, 6).unwrap(), &lines, &options).unwrap();

        assert_eq!(snippet.target[1].anchor, Anchor::new(0, 6));
        assert_eq!(snippet.target[2].anchor, Anchor::new(0, 6));
    }

    #[test]
    fn test_common_indentation_shifts_text_and_anchors() {
        let lines: Vec<String> = [
            "class A:",
            "    def run(self):",
            "        self.check()",
            "        raise ValueError('x')",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let span = Span::new(4, 4, 8, 29).unwrap();
        let snippet = build_for_span(&span, &lines, &RenderOptions::default()).unwrap();

        // "class A:" is context and has no indentation
        assert_eq!(snippet.common_indent, 0);

        let options = RenderOptions {
            max_context_lines_before: 2,
            ..RenderOptions::default()
        };
        let snippet = build_for_span(&span, &lines, &options).unwrap();
        assert_eq!(snippet.common_indent, 4);
        assert_eq!(snippet.target[0].text, "    raise ValueError('x')");
        assert_eq!(snippet.target[0].anchor, Anchor::new(4, 25));
        assert_eq!(snippet.context_before[0].text, "def run(self):");
    }

    #[test]
    fn test_blank_context_is_trimmed() {
        let lines: Vec<String> = ["", "", "fail()", "", ""].iter().map(|s| s.to_string()).collect();
        let snippet =
            build_for_span(&Span::new(3, 3, 0, 6).unwrap(), &lines, &RenderOptions::default()).unwrap();

        assert!(snippet.context_before.is_empty());
        assert!(snippet.context_after.is_empty());
    }

    #[test]
    fn test_zero_width_anchor_is_legal() {
        let lines = numbered_file(3);
        let snippet =
            build_for_span(&Span::new(2, 2, 4, 4).unwrap(), &lines, &RenderOptions::default()).unwrap();
        assert_eq!(snippet.target[0].anchor.width(), 0);
    }

    #[test]
    fn test_span_past_end_of_file() {
        let lines = numbered_file(3);
        assert!(build_for_span(&Span::new(9, 9, 0, 1).unwrap(), &lines, &RenderOptions::default()).is_none());
    }

    #[test]
    fn test_span_running_past_end_of_file_is_clamped() {
        let lines = numbered_file(2);
        let snippet =
            build_for_span(&Span::new(2, 3, 0, 4).unwrap(), &lines, &RenderOptions::default()).unwrap();

        let numbers: Vec<usize> = snippet.target.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![2]);
        assert_eq!(snippet.truncated_count, 0);
    }

    #[test]
    fn test_truncation_counts_only_existing_lines() {
        let lines = numbered_file(10);
        let snippet =
            build_for_span(&Span::new(3, 40, 0, 4).unwrap(), &lines, &RenderOptions::default()).unwrap();

        let numbers: Vec<usize> = snippet.target.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![3, 4, 5, 6]);
        assert_eq!(snippet.truncated_count, 4);
    }

    #[test]
    fn test_span_ending_at_usize_max_does_not_overflow() {
        let lines = numbered_file(1);
        let snippet =
            build_for_span(&Span::new(1, usize::MAX, 0, 1).unwrap(), &lines, &RenderOptions::default())
                .unwrap();

        assert_eq!(snippet.target.len(), 1);
        assert_eq!(snippet.truncated_count, 0);
        assert!(snippet.context_after.is_empty());
    }

    fn user_frame(frame: &Frame) -> ClassifiedFrame<'_> {
        ClassifiedFrame {
            frame,
            origin: OriginKind::User,
            module_name: "app".to_string(),
        }
    }

    #[test]
    fn test_build_requires_selection_lines_and_span() {
        let lines = numbered_file(5);
        let with_span = Frame::new("f", "app.py", Some(Span::new(2, 2, 0, 4).unwrap()));
        let without_span = Frame::new("f", "app.py", None);
        let options = RenderOptions::default();

        assert!(build(&user_frame(&with_span), true, Some(&lines), &options).is_some());
        assert!(build(&user_frame(&with_span), false, Some(&lines), &options).is_none());
        assert!(build(&user_frame(&with_span), true, None, &options).is_none());
        assert!(build(&user_frame(&without_span), true, Some(&lines), &options).is_none());
    }
}
