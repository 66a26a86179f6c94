//! Error types for wsver
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wsver operations
pub type WsverResult<T> = Result<T, WsverError>;

/// Main error type for wsver operations
#[derive(Error, Debug)]
pub enum WsverError {
    /// Every candidate workspace file failed to read
    #[error(
        "no workspace file found in {}: tried {}",
        root.display(),
        candidates.join(", ")
    )]
    WorkspaceNotFound {
        root: PathBuf,
        candidates: Vec<String>,
    },

    /// A workspace file was read but is not a valid workspace definition
    #[error("invalid workspace file {}: {message}", path.display())]
    WorkspaceParse { path: PathBuf, message: String },

    /// Requested projects that the workspace does not declare
    #[error("unknown project(s): {}", names.join(", "))]
    UnknownProject { names: Vec<String> },

    /// Independent versioning was requested for zero projects
    #[error("no projects selected for independent versioning")]
    EmptySelection,

    /// The interactive prompt cannot be shown
    #[error("interactive selection unavailable: {reason}; pass --projects instead")]
    InteractionUnavailable { reason: String },

    /// Writing the workspace or its metadata failed
    #[error("failed to persist {}: {message}", path.display())]
    Persistence { path: PathBuf, message: String },

    /// Invalid `.wsver.toml`
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::domain::ports::PersistenceError> for WsverError {
    fn from(err: crate::domain::ports::PersistenceError) -> Self {
        WsverError::Persistence {
            path: err.path,
            message: err.message,
        }
    }
}

impl WsverError {
    /// File the error points at, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            WsverError::WorkspaceNotFound { root, .. } => Some(root),
            WsverError::WorkspaceParse { path, .. } | WsverError::Persistence { path, .. } => {
                Some(path)
            }
            WsverError::Config { file, .. } => Some(file),
            _ => None,
        }
    }
}
