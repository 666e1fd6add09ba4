//! Rendering options
//!
//! All fields have defaults, so a partial TOML or JSON document is a valid
//! configuration.

use serde::{Deserialize, Serialize};

/// Knobs controlling snippet extraction and chain traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Context lines shown above the target span
    pub max_context_lines_before: usize,
    /// Context lines shown below the target span
    pub max_context_lines_after: usize,
    /// Target lines shown before collapsing the rest into a marker
    pub max_target_lines: usize,
    /// Start highlights on continuation lines at their own indentation
    pub skip_indentation_highlight: bool,
    /// Strip the indentation shared by every displayed line
    pub remove_common_indentation: bool,
    /// Frames classified as user code that get a snippet besides the innermost one
    pub max_user_snippets: usize,
    /// Cap on linearized chain length; `None` means unbounded
    pub max_chain_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_context_lines_before: 3,
            max_context_lines_after: 2,
            max_target_lines: 5,
            skip_indentation_highlight: true,
            remove_common_indentation: true,
            max_user_snippets: 3,
            max_chain_depth: None,
        }
    }
}
