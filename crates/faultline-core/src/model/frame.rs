use serde::{Deserialize, Serialize};

use crate::model::Span;

/// Prefix marking a synthetic pseudo-file such as `<string>` or `<frozen importlib>`
pub const SYNTHETIC_MARKER: char = '<';

/// One stack entry: a function activation and the span executing in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub function_name: String,
    pub file_identity: String,
    #[serde(default)]
    pub span: Option<Span>,
}

impl Frame {
    pub fn new(
        function_name: impl Into<String>,
        file_identity: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            file_identity: file_identity.into(),
            span,
        }
    }

    /// Whether the file identity names a synthetic source with no stable lines
    pub fn is_synthetic(&self) -> bool {
        self.file_identity.starts_with(SYNTHETIC_MARKER)
    }

    /// First line of the span, if the runtime resolved one
    pub fn line(&self) -> Option<usize> {
        self.span.map(|s| s.line_start())
    }
}
