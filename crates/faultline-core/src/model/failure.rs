use serde::{Deserialize, Serialize};

use crate::model::{Frame, Span};

/// A failure that itself points at source, such as a syntax error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub span: Span,
}

/// One raised failure plus its chain links
///
/// A node is either a leaf failure (frames plus an optional cause/context)
/// or a group (non-empty `children`). Groups still render their own header,
/// frames and chain before their children.
///
/// `frames` are stored outermost-first, in capture order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FailureNode {
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub cause: Option<Box<FailureNode>>,
    #[serde(default)]
    pub context: Option<Box<FailureNode>>,
    #[serde(default)]
    pub children: Vec<FailureNode>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl FailureNode {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Append a frame (outermost-first order)
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_cause(mut self, cause: FailureNode) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn with_context(mut self, context: FailureNode) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    pub fn with_child(mut self, child: FailureNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_location(mut self, file: impl Into<String>, span: Span) -> Self {
        self.location = Some(SourceLocation {
            file: file.into(),
            span,
        });
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Header line text: `Kind: message`
    pub fn header(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}
