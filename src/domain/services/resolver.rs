//! Workspace definition resolver
//!
//! Tries each candidate file in order. A failed read falls through to the
//! next candidate; the first successful read is parsed and returned, and a
//! parse failure stops the search.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::WorkspaceDefinition;
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::CandidateFiles;
use crate::error::{WsverError, WsverResult};

/// A parsed workspace and the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWorkspace {
    pub path: PathBuf,
    pub definition: WorkspaceDefinition,
}

/// Outcome of reading one candidate
enum ReadAttempt {
    Found(String),
    Missing(FsError),
}

pub struct WorkspaceResolver<FS: FileSystem> {
    fs: FS,
    candidates: CandidateFiles,
}

impl<FS: FileSystem> WorkspaceResolver<FS> {
    pub fn new(fs: FS) -> Self {
        Self::with_candidates(fs, CandidateFiles::default())
    }

    pub fn with_candidates(fs: FS, candidates: CandidateFiles) -> Self {
        Self { fs, candidates }
    }

    /// Locate and parse the workspace file under `root`.
    pub fn resolve(&self, root: &Path) -> WsverResult<ResolvedWorkspace> {
        for path in self.candidates.paths(root) {
            match self.attempt(&path) {
                ReadAttempt::Found(content) => {
                    let definition = parse_workspace(&path, &content)?;
                    info!(
                        path = %path.display(),
                        projects = definition.projects.len(),
                        "resolved workspace"
                    );
                    return Ok(ResolvedWorkspace { path, definition });
                }
                ReadAttempt::Missing(err) => {
                    debug!(path = %path.display(), error = %err, "workspace candidate unreadable");
                }
            }
        }

        Err(WsverError::WorkspaceNotFound {
            root: root.to_path_buf(),
            candidates: self.candidates.names().to_vec(),
        })
    }

    fn attempt(&self, path: &Path) -> ReadAttempt {
        match self.fs.read(path) {
            Ok(content) => ReadAttempt::Found(content),
            Err(err) => ReadAttempt::Missing(err),
        }
    }
}

/// Parse workspace JSON read from `path`
pub fn parse_workspace(path: &Path, content: &str) -> WsverResult<WorkspaceDefinition> {
    WorkspaceDefinition::from_json(content).map_err(|e| WsverError::WorkspaceParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
