//! Structural view of source text
//!
//! The report engine never parses source itself. A `SyntaxProvider` turns
//! file text into a `Construct` tree; the re-raise detector walks that tree
//! by line containment.

pub mod outline;
pub mod reraise;

use crate::errors::{FaultlineError, Result};

pub use outline::OutlineParser;
pub use reraise::{identify_construct, is_reraise};

/// Kind tag of a structural construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// Whole file
    Module,
    Class,
    Function,
    /// Conditional, including its alternative branches
    Branch,
    Loop,
    Try,
    /// Exception handler clause of a `Try`
    Handler,
    /// Expression statement; its child is the expression itself
    ExprStatement,
    Expression,
    /// Raise/throw statement
    Raise,
    /// Any other statement
    Statement,
}

impl ConstructKind {
    /// Whether containment lookup may descend into this kind's children
    ///
    /// Leaf kinds end the descent even if a provider attached children to
    /// them.
    pub fn descends(&self) -> bool {
        match self {
            ConstructKind::Module
            | ConstructKind::Class
            | ConstructKind::Function
            | ConstructKind::Branch
            | ConstructKind::Loop
            | ConstructKind::Try
            | ConstructKind::Handler
            | ConstructKind::ExprStatement => true,
            ConstructKind::Expression | ConstructKind::Raise | ConstructKind::Statement => false,
        }
    }
}

/// A node of the structural tree: a kind tag, the lines it covers and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    pub kind: ConstructKind,
    pub line_start: usize,
    pub line_end: usize,
    pub children: Vec<Construct>,
}

impl Construct {
    pub fn new(kind: ConstructKind, line_start: usize, line_end: usize) -> Self {
        Self {
            kind,
            line_start,
            line_end,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Construct>) -> Self {
        self.children = children;
        self
    }

    /// Children visible to containment lookup, per the kind's dispatch entry
    pub fn lookup_children(&self) -> &[Construct] {
        if self.kind.descends() {
            &self.children
        } else {
            &[]
        }
    }

    /// Whether this construct covers every line of `[line_start, line_end]`
    pub fn contains_lines(&self, line_start: usize, line_end: usize) -> bool {
        self.line_start <= line_start && self.line_end >= line_end
    }
}

/// Capability turning file text into a structural tree
pub trait SyntaxProvider {
    /// Parse the lines of `file` into a tree rooted at a `Module`
    ///
    /// # Errors
    /// * `SyntaxUnavailable` - the text could not be structured
    fn parse(&self, file: &str, lines: &[String]) -> Result<Construct>;
}

/// Provider that never yields a tree; re-raise detection is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSyntax;

impl SyntaxProvider for NoSyntax {
    fn parse(&self, file: &str, _lines: &[String]) -> Result<Construct> {
        Err(FaultlineError::SyntaxUnavailable {
            file: file.to_string(),
            reason: "no syntax provider configured".to_string(),
        })
    }
}
