//! In-memory file system
//!
//! Records every read so callers can assert on attempt order. Clones share
//! the same state.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    reads: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.state().files.insert(path.into(), content.into());
        self
    }

    /// Reads of `path` fail with a permission error
    pub fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.state().unreadable.insert(path.into());
        self
    }

    /// Writes to `path` fail with a permission error
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.state().read_only.insert(path.into());
        self
    }

    /// Current content of `path`
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state().files.get(path.as_ref()).cloned()
    }

    /// Every path passed to `read`, in call order
    pub fn reads(&self) -> Vec<PathBuf> {
        self.state().reads.clone()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock only happens inside a failing test.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let mut state = self.state();
        state.reads.push(path.to_path_buf());
        if state.unreadable.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.state();
        if state.read_only.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
