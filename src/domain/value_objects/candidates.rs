//! Workspace file candidates
//!
//! The resolver tries these names in order, relative to the workspace root.

use std::path::{Path, PathBuf};

/// Nx `workspace.json` first, then the Angular CLI `angular.json` fallback.
pub const WORKSPACE_CANDIDATES: [&str; 2] = ["workspace.json", "angular.json"];

/// Ordered list of workspace file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFiles(Vec<String>);

impl CandidateFiles {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidate paths under `root`, in precedence order
    pub fn paths<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.0.iter().map(move |name| root.join(name))
    }
}

impl Default for CandidateFiles {
    fn default() -> Self {
        Self::new(WORKSPACE_CANDIDATES)
    }
}
