//! Project selection and versioning modes

use indexmap::IndexSet;
use serde::Serialize;

/// Project names chosen for mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionResult(IndexSet<String>);

impl SelectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionResult {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// How the caller wants projects to be selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Use exactly these names
    Declarative(Vec<String>),
    /// Ask the operator
    Interactive,
}

/// What the caller asked for, before selection has happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersioningRequest {
    Synchronized,
    Independent(Selection),
}

impl VersioningRequest {
    /// Map the schema options onto an explicit request.
    ///
    /// `sync_versions` wins over `projects`. Otherwise an empty project list
    /// means "prompt me".
    pub fn from_schema(sync_versions: bool, projects: &[String]) -> Self {
        if sync_versions {
            VersioningRequest::Synchronized
        } else if projects.is_empty() {
            VersioningRequest::Independent(Selection::Interactive)
        } else {
            VersioningRequest::Independent(Selection::Declarative(projects.to_vec()))
        }
    }
}

/// Input to the mutation planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersioningMode {
    /// One `workspace` project carries the version target
    Synchronized,
    /// Each selected project gets its own version target
    Independent(SelectionResult),
}
