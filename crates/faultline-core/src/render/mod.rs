//! Report composer
//!
//! Renders classified frames, snippets and re-raise annotations into the
//! final text report, stitching chained failures with labels and nesting
//! group members under tree-drawing prefixes.

pub mod frame_render;
pub mod report_render;

use crate::classify::ClassifierConfig;
use crate::options::RenderOptions;
use crate::palette::EscapePalette;
use crate::source::SourceProvider;
use crate::syntax::SyntaxProvider;

pub use frame_render::{describe_frame, write_frame, write_snippet, FrameReport};
pub use report_render::{render_failure, render_to_string};

/// Everything a report needs besides the failure itself
///
/// Built once per report; nothing in it changes while the report renders.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: EscapePalette,
    pub options: &'a RenderOptions,
    pub classifier: &'a ClassifierConfig,
    pub sources: &'a dyn SourceProvider,
    pub syntax: &'a dyn SyntaxProvider,
}
