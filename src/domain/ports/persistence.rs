//! Persistence ports
//!
//! The writer stores the mutated workspace; the metadata store records the
//! companion per-project entry (`nx.json` in Nx workspaces).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{EditSet, WorkspaceDefinition};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to persist {}: {message}", path.display())]
pub struct PersistenceError {
    pub path: PathBuf,
    pub message: String,
}

impl PersistenceError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Persists a mutated workspace definition
pub trait WorkspaceWriter {
    /// Write `workspace` to `path`. `edits` describes what changed.
    fn persist(
        &self,
        path: &Path,
        workspace: &WorkspaceDefinition,
        edits: &EditSet,
    ) -> Result<(), PersistenceError>;
}

/// What the metadata store did with a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataOutcome {
    Registered,
    /// The workspace has no metadata store (plain Angular CLI)
    Skipped,
}

/// Records per-project metadata (tags) next to the workspace file
pub trait ProjectMetadataStore {
    fn register(
        &self,
        root: &Path,
        project: &str,
        tags: &[String],
    ) -> Result<MetadataOutcome, PersistenceError>;
}
