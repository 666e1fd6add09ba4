//! Source text providers
//!
//! The snippet builder reads file text through the `SourceProvider` trait so
//! hosts can serve sources from disk, from memory, or not at all. A read
//! failure only removes one frame's snippet; it never fails the report.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::errors::{FaultlineError, Result};

/// Capability to fetch the lines of a file by identity
pub trait SourceProvider {
    /// Read the lines of `file`
    ///
    /// # Errors
    /// * `SourceUnavailable` - the file could not be read
    fn read_lines(&self, file: &str) -> Result<Vec<String>>;
}

/// Reads sources from the filesystem
///
/// Relative identities resolve against `base_dir` when one is set.
///
/// # Example
/// ```no_run
/// use faultline_core::source::{FsSourceProvider, SourceProvider};
///
/// let provider = FsSourceProvider::new();
/// let lines = provider.read_lines("src/main.py");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FsSourceProvider {
    base_dir: Option<PathBuf>,
}

impl FsSourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceProvider for FsSourceProvider {
    fn read_lines(&self, file: &str) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(self.resolve(file)).map_err(|err| {
            FaultlineError::SourceUnavailable {
                file: file.to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(text.lines().map(str::to_string).collect())
    }
}

/// Serves sources from an in-memory map
///
/// # Example
/// ```
/// use faultline_core::source::{InMemorySourceProvider, SourceProvider};
///
/// let provider = InMemorySourceProvider::new().with_file("app.py", "x = 1\nfail()\n");
/// assert_eq!(provider.read_lines("app.py").unwrap(), vec!["x = 1", "fail()"]);
/// assert!(provider.read_lines("other.py").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceProvider {
    files: HashMap<String, String>,
}

impl InMemorySourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(file, text);
        self
    }

    pub fn insert(&mut self, file: impl Into<String>, text: impl Into<String>) {
        self.files.insert(file.into(), text.into());
    }
}

impl SourceProvider for InMemorySourceProvider {
    fn read_lines(&self, file: &str) -> Result<Vec<String>> {
        self.files
            .get(file)
            .map(|text| text.lines().map(str::to_string).collect())
            .ok_or_else(|| FaultlineError::SourceUnavailable {
                file: file.to_string(),
                reason: "not registered".to_string(),
            })
    }
}
