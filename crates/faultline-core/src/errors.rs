use thiserror::Error;

/// Result type alias using FaultlineError
pub type Result<T> = std::result::Result<T, FaultlineError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input contract
    MalformedSpan,

    // Collaborators
    SourceUnavailable,
    SyntaxUnavailable,

    // Integration/IO
    Io,
    Serialization,
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedSpan => "ERR_MALFORMED_SPAN",
            ExErrorKind::SourceUnavailable => "ERR_SOURCE_UNAVAILABLE",
            ExErrorKind::SyntaxUnavailable => "ERR_SYNTAX_UNAVAILABLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context about which operation
/// and which source location were involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    file: Option<String>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            file: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file identity context
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Add line context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(file) = &self.file {
            write!(f, " (file: {})", file)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Faultline operations
///
/// Only `Io` ever escapes a report call; the collaborator variants are
/// produced by providers and absorbed by the renderer as degraded output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FaultlineError {
    /// A span starts at line 0 or violates `line_start <= line_end` (or the
    /// column order on a single line)
    #[error(
        "Malformed span: lines {line_start}..{line_end}, columns {col_start}..{col_end}"
    )]
    MalformedSpan {
        line_start: usize,
        line_end: usize,
        col_start: usize,
        col_end: usize,
    },

    /// Source text for a file identity could not be read
    #[error("Source unavailable for {file}: {reason}")]
    SourceUnavailable { file: String, reason: String },

    /// Source text could not be turned into a structural tree
    #[error("Syntax unavailable for {file}: {reason}")]
    SyntaxUnavailable { file: String, reason: String },

    /// Writing to the output sink or reading an input file failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Failure description could not be (de)serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration could not be loaded
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Conversion from FaultlineError to ExError
impl From<FaultlineError> for ExError {
    fn from(err: FaultlineError) -> Self {
        match err {
            FaultlineError::MalformedSpan {
                line_start,
                line_end,
                col_start,
                col_end,
            } => ExError::new(ExErrorKind::MalformedSpan)
                .with_line(line_start)
                .with_message(format!(
                    "Span {}:{}..{}:{} is not a well-formed 1-indexed range",
                    line_start, col_start, line_end, col_end
                )),

            FaultlineError::SourceUnavailable { file, reason } => {
                ExError::new(ExErrorKind::SourceUnavailable)
                    .with_file(file)
                    .with_message(reason)
            }

            FaultlineError::SyntaxUnavailable { file, reason } => {
                ExError::new(ExErrorKind::SyntaxUnavailable)
                    .with_file(file)
                    .with_message(reason)
            }

            FaultlineError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            FaultlineError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            FaultlineError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }
        }
    }
}

/// Conversion from std::io::Error to FaultlineError
impl From<std::io::Error> for FaultlineError {
    fn from(err: std::io::Error) -> Self {
        FaultlineError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from serde_json::Error to FaultlineError
impl From<serde_json::Error> for FaultlineError {
    fn from(err: serde_json::Error) -> Self {
        FaultlineError::Serialization {
            message: err.to_string(),
        }
    }
}
