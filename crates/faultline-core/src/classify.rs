//! Frame classification
//!
//! Resolves a frame's file identity to a dotted module name and a coarse
//! origin kind. The heuristic is best effort: a frame that matches no search
//! root is still rendered, as user code under its raw identity.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::model::Frame;

/// Coarse classification of a frame's source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    /// Synthetic pseudo-file (`<string>`, `<frozen ...>`)
    Internal,
    StandardLibrary,
    ThirdParty,
    User,
}

/// Inputs of the classifier that come from the host environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Module search roots, in precedence order
    pub search_roots: Vec<PathBuf>,
    /// Working directory; files beneath it are user code
    pub cwd: PathBuf,
    /// Top-level module names belonging to the standard library
    pub stdlib_modules: HashSet<String>,
}

impl ClassifierConfig {
    pub fn new(search_roots: Vec<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_roots,
            cwd: cwd.into(),
            stdlib_modules: HashSet::new(),
        }
    }

    pub fn with_stdlib_modules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stdlib_modules.extend(names.into_iter().map(Into::into));
        self
    }
}

/// A frame with its resolved origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFrame<'a> {
    pub frame: &'a Frame,
    pub origin: OriginKind,
    pub module_name: String,
}

/// Classify a frame against the configured search roots
///
/// The first search root that is a path prefix of the file identity wins;
/// callers control precedence by ordering the roots.
pub fn classify<'a>(frame: &'a Frame, config: &ClassifierConfig) -> ClassifiedFrame<'a> {
    if frame.is_synthetic() {
        return ClassifiedFrame {
            frame,
            origin: OriginKind::Internal,
            module_name: frame.file_identity.clone(),
        };
    }

    let path = Path::new(&frame.file_identity);

    for root in &config.search_roots {
        let Some(module_path) = path.strip_prefix(root).ok().and_then(module_components) else {
            continue;
        };

        let origin = if config.stdlib_modules.contains(&module_path[0]) {
            OriginKind::StandardLibrary
        } else if path.starts_with(&config.cwd) {
            OriginKind::User
        } else {
            OriginKind::ThirdParty
        };

        return ClassifiedFrame {
            frame,
            origin,
            module_name: module_path.join("."),
        };
    }

    ClassifiedFrame {
        frame,
        origin: OriginKind::User,
        module_name: frame.file_identity.clone(),
    }
}

/// Directory components followed by the file stem; `None` for an empty path
fn module_components(relative: &Path) -> Option<Vec<String>> {
    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let file_name = parts.pop()?;
    let stem = Path::new(&file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or(file_name);
    parts.push(stem);

    Some(parts)
}
