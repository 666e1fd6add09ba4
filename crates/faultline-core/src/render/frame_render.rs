use std::io::Write;

use crate::classify::{ClassifiedFrame, OriginKind};
use crate::errors::Result;
use crate::log_degraded;
use crate::palette::EscapePalette;
use crate::render::RenderContext;
use crate::snippet::{self, Snippet};
use crate::syntax::is_reraise;

/// Indentation of snippet lines below the frame line
const SNIPPET_INDENT: &str = "    ";

/// Everything known about one frame, ready to be written
#[derive(Debug, Clone)]
pub struct FrameReport<'a> {
    pub classified: ClassifiedFrame<'a>,
    pub snippet: Option<Snippet>,
    pub is_reraise: bool,
}

/// Gather snippet and re-raise information for a classified frame
///
/// Source text is only read for selected frames with a span. Unreadable
/// sources and unparseable text degrade to "no snippet" and "not a
/// re-raise" respectively.
pub fn describe_frame<'a>(
    classified: ClassifiedFrame<'a>,
    index: usize,
    selected: bool,
    ctx: &RenderContext<'_>,
) -> FrameReport<'a> {
    let frame = classified.frame;

    let lines = match (selected, frame.span) {
        (true, Some(_)) => match ctx.sources.read_lines(&frame.file_identity) {
            Ok(lines) => Some(lines),
            Err(err) => {
                log_degraded!(
                    "build_snippet",
                    "source unavailable",
                    file = frame.file_identity.as_str(),
                    frame_index = index,
                    error = %err,
                );
                None
            }
        },
        _ => None,
    };

    let snippet = snippet::build(&classified, selected, lines.as_deref(), ctx.options);

    let is_reraise = match (index, frame.span, &lines) {
        (index, Some(span), Some(lines)) if index > 0 => {
            match ctx.syntax.parse(&frame.file_identity, lines) {
                Ok(root) => is_reraise(index, &span, &root),
                Err(err) => {
                    log_degraded!(
                        "detect_reraise",
                        "syntax unavailable",
                        file = frame.file_identity.as_str(),
                        frame_index = index,
                        error = %err,
                    );
                    false
                }
            }
        }
        _ => false,
    };

    FrameReport {
        classified,
        snippet,
        is_reraise,
    }
}

/// Write the `at function (module:line)` line and the frame's snippet
///
/// # Errors
/// * `Io` - the sink rejected the write
pub fn write_frame(
    out: &mut dyn Write,
    report: &FrameReport<'_>,
    index: usize,
    prefix: &str,
    palette: &EscapePalette,
) -> Result<()> {
    let classified = &report.classified;
    let frame = classified.frame;

    let dim = if classified.origin != OriginKind::User && index != 0 {
        palette.dim
    } else {
        ""
    };
    let emphasis = if report.snippet.is_some() {
        palette.emphasis
    } else {
        ""
    };
    let line = match (classified.origin, frame.line()) {
        (OriginKind::Internal, _) | (_, None) => String::new(),
        (_, Some(line)) => format!(":{}", line),
    };
    let reraise = if report.is_reraise { " [re-raise]" } else { "" };

    writeln!(
        out,
        "{prefix}{dim}  at {emphasis}{function}{reset}{dim} ({module}{line}){reraise}{reset}",
        function = frame.function_name,
        module = classified.module_name,
        reset = palette.reset,
    )?;

    if let Some(snippet) = &report.snippet {
        write_snippet(out, snippet, prefix, palette)?;
    }

    Ok(())
}

/// Write a snippet block: numbered context, target lines with caret rows,
/// the truncation marker, and a closing prefix-only line
///
/// # Errors
/// * `Io` - the sink rejected the write
pub fn write_snippet(
    out: &mut dyn Write,
    snippet: &Snippet,
    prefix: &str,
    palette: &EscapePalette,
) -> Result<()> {
    let width = snippet.line_number_width;
    let gutter = " ".repeat(width + 1);

    for line in &snippet.context_before {
        writeln!(
            out,
            "{prefix}{dim}{SNIPPET_INDENT}{number:>width$} {text}{reset}",
            dim = palette.dim,
            number = line.number,
            text = line.text,
            reset = palette.reset,
        )?;
    }

    for line in &snippet.target {
        writeln!(
            out,
            "{prefix}{SNIPPET_INDENT}{number:>width$} {text}",
            number = line.number,
            text = line.text,
        )?;
        writeln!(
            out,
            "{prefix}{SNIPPET_INDENT}{gutter}{pad}{caret}{carets}{reset}",
            pad = " ".repeat(line.anchor.start),
            caret = palette.caret,
            carets = "^".repeat(line.anchor.width()),
            reset = palette.reset,
        )?;
    }

    if snippet.truncated_count > 0 {
        writeln!(
            out,
            "{prefix}{SNIPPET_INDENT}{gutter}[{count} more lines]",
            count = snippet.truncated_count,
        )?;
    }

    for line in &snippet.context_after {
        writeln!(
            out,
            "{prefix}{dim}{SNIPPET_INDENT}{number:>width$} {text}{reset}",
            dim = palette.dim,
            number = line.number,
            text = line.text,
            reset = palette.reset,
        )?;
    }

    writeln!(out, "{prefix}")?;
    Ok(())
}
