use std::io::Write;
use std::path::Path;

use crate::classify::{classify, OriginKind};
use crate::errors::Result;
use crate::model::{FailureNode, Frame};
use crate::render::{describe_frame, write_frame, RenderContext};
use crate::traversal::linearize;

/// Column the horizontal rules between group members are padded to
const RULE_WIDTH: usize = 80;

/// Render a failure (leaf or group) and everything reachable from it
///
/// Group members are rendered recursively, each under a deeper tree prefix
/// and followed by a horizontal rule.
///
/// # Errors
/// * `Io` - the sink rejected a write; every other problem degrades the
///   output locally
pub fn render_failure(
    out: &mut dyn Write,
    node: &FailureNode,
    prefix: &str,
    ctx: &RenderContext<'_>,
) -> Result<()> {
    if !node.is_group() {
        return write_chain(out, node, prefix, prefix, ctx);
    }

    write_chain(
        out,
        node,
        &format!(" | {prefix}"),
        &format!("{prefix} + "),
        ctx,
    )?;
    write_rule(out, &format!("{prefix} +--+"))?;

    for child in &node.children {
        render_failure(out, child, &format!("    | {prefix}"), ctx)?;
        write_rule(out, &format!("{prefix}    +"))?;
    }

    Ok(())
}

/// Render a failure into a string
pub fn render_to_string(node: &FailureNode, ctx: &RenderContext<'_>) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = render_failure(&mut out, node, "", ctx);
    String::from_utf8_lossy(&out).into_owned()
}

/// Render a failure's cause/context chain, labelling each chained entry
fn write_chain(
    out: &mut dyn Write,
    node: &FailureNode,
    prefix: &str,
    prefix_first: &str,
    ctx: &RenderContext<'_>,
) -> Result<()> {
    let palette = &ctx.palette;

    for link in linearize(node, ctx.options.max_chain_depth) {
        if let Some(label) = link.relation.label() {
            writeln!(out, "{prefix}")?;
            writeln!(out, "{prefix}{}{label}{}", palette.italic, palette.reset)?;
            writeln!(out, "{prefix}")?;
        }

        writeln!(out, "{prefix_first}{}", link.node.header())?;
        write_frames(out, link.node, prefix, ctx)?;
    }

    Ok(())
}

/// Render a single failure's frames, innermost first
fn write_frames(
    out: &mut dyn Write,
    node: &FailureNode,
    prefix: &str,
    ctx: &RenderContext<'_>,
) -> Result<()> {
    let frames = render_order(node);
    let mut user_snippets = 0;

    for (index, frame) in frames.iter().enumerate() {
        let classified = classify(frame, ctx.classifier);

        let is_user = classified.origin == OriginKind::User;
        let selected = index == 0 || (is_user && user_snippets < ctx.options.max_user_snippets);
        if is_user {
            user_snippets += 1;
        }

        let report = describe_frame(classified, index, selected, ctx);
        write_frame(out, &report, index, prefix, &ctx.palette)?;
    }

    Ok(())
}

/// Frames in display order: a source-located failure's own location first,
/// then the captured frames from innermost to outermost
fn render_order(node: &FailureNode) -> Vec<Frame> {
    let location = node.location.as_ref().map(|location| {
        let name = Path::new(&location.file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.file.clone());
        Frame::new(name, location.file.clone(), Some(location.span))
    });

    location
        .into_iter()
        .chain(node.frames.iter().rev().cloned())
        .collect()
}

fn write_rule(out: &mut dyn Write, line: &str) -> Result<()> {
    let fill = RULE_WIDTH.saturating_sub(line.chars().count());
    writeln!(out, "{line}{}", "-".repeat(fill))?;
    Ok(())
}
