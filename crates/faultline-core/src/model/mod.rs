pub mod failure;
pub mod frame;
pub mod span;

pub use failure::{FailureNode, SourceLocation};
pub use frame::Frame;
pub use span::Span;
