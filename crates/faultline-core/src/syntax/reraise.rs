//! Re-raise detection
//!
//! A frame other than the innermost one is a re-raise when the statement it
//! was executing is itself a raise. Lookup is by line containment only, so
//! constructs sharing lines cannot be told apart; the walk then stops at the
//! enclosing construct.

use crate::model::Span;
use crate::syntax::{Construct, ConstructKind};

/// Find the smallest construct covering `[line_start, line_end]`
///
/// Descends while exactly one child of the current candidate contains the
/// lines. No match or several matches leave the current candidate as the
/// answer.
pub fn identify_construct(root: &Construct, line_start: usize, line_end: usize) -> &Construct {
    let mut best = root;

    loop {
        let mut matching = best
            .lookup_children()
            .iter()
            .filter(|child| child.contains_lines(line_start, line_end));

        match (matching.next(), matching.next()) {
            (Some(only), None) => best = only,
            _ => return best,
        }
    }
}

/// Whether the frame at `frame_index` is re-raising its child's failure
///
/// The innermost frame (index 0) is the raise site itself and is never a
/// re-raise.
pub fn is_reraise(frame_index: usize, span: &Span, root: &Construct) -> bool {
    if frame_index == 0 {
        return false;
    }

    identify_construct(root, span.line_start(), span.line_end()).kind == ConstructKind::Raise
}
