//! Faultline Core - diagnostic rendering engine for failure chains
//!
//! This crate turns an abstract failure chain (failures linked by cause and
//! context, or grouped into trees of concurrent failures) into a readable
//! report with one entry per stack frame, including:
//! - Chain linearization with cycle and depth guards
//! - Frame origin classification against configured search roots
//! - Source excerpts with trimmed context and caret highlights
//! - Re-raise detection over a structural tree of the source
//! - Tree-prefixed, optionally colorized report composition
//!
//! Reading sources and parsing them are collaborator capabilities
//! (`SourceProvider`, `SyntaxProvider`); their failures degrade a single
//! frame's output and never fail a report.

pub mod classify;
pub mod errors;
pub mod handler;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod palette;
pub mod render;
pub mod snippet;
pub mod source;
pub mod syntax;
pub mod traversal;

// Re-export for use in macros
pub use faultline_core_types;

// Re-export commonly used types
pub use classify::{classify, ClassifiedFrame, ClassifierConfig, OriginKind};
pub use errors::{ExError, ExErrorKind, FaultlineError, Result};
pub use handler::{dump, ReportHandler, ReportSettings};
pub use model::{FailureNode, Frame, SourceLocation, Span};
pub use options::RenderOptions;
pub use palette::{ColorMode, EscapePalette};
pub use render::{render_failure, render_to_string, RenderContext};
pub use source::{FsSourceProvider, InMemorySourceProvider, SourceProvider};
pub use syntax::{NoSyntax, OutlineParser, SyntaxProvider};
pub use traversal::{linearize, ChainLink, Relation};
