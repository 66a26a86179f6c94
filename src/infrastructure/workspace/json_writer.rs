//! JSON Workspace Writer
//!
//! Implements the WorkspaceWriter port. Output is pretty JSON with two-space
//! indentation and a trailing newline, in the layout the file was read in.
//! Keys already present in the file keep their position so the diff only
//! shows what was added.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::entities::{EditSet, WorkspaceDefinition};
use crate::domain::ports::{FileSystem, PersistenceError, WorkspaceWriter};

pub struct JsonWorkspaceWriter<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> JsonWorkspaceWriter<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }
}

/// Render a workspace the way the writer stores it.
///
/// When `existing` is given, object keys follow its order and new keys are
/// appended.
pub fn render_workspace(
    workspace: &WorkspaceDefinition,
    existing: Option<&Value>,
) -> serde_json::Result<String> {
    let mut doc = workspace.to_document()?;
    if let Some(existing) = existing {
        align_key_order(&mut doc, existing);
    }
    let mut content = serde_json::to_string_pretty(&doc)?;
    content.push('\n');
    Ok(content)
}

fn align_key_order(doc: &mut Value, template: &Value) {
    let (Some(map), Some(template)) = (doc.as_object_mut(), template.as_object()) else {
        return;
    };

    let entries = std::mem::take(map);
    for key in template.keys() {
        if let Some(value) = entries.get(key) {
            map.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in entries {
        if !map.contains_key(&key) {
            map.insert(key, value);
        }
    }

    for (key, value) in map.iter_mut() {
        if let Some(nested) = template.get(key) {
            align_key_order(value, nested);
        }
    }
}

impl<FS: FileSystem> WorkspaceWriter for JsonWorkspaceWriter<FS> {
    fn persist(
        &self,
        path: &Path,
        workspace: &WorkspaceDefinition,
        edits: &EditSet,
    ) -> Result<(), PersistenceError> {
        let existing = match self.fs.read(path) {
            Ok(content) => serde_json::from_str::<Value>(&content).ok(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no existing workspace file to align with");
                None
            }
        };

        let content = render_workspace(workspace, existing.as_ref())
            .map_err(|e| PersistenceError::new(path, e.to_string()))?;
        self.fs
            .write(path, &content)
            .map_err(|e| PersistenceError::new(path, e.to_string()))?;

        info!(path = %path.display(), edits = edits.len(), "workspace written");
        Ok(())
    }
}
