//! `nx.json` project metadata store
//!
//! Registers `projects.<name>.tags` next to the workspace file. Angular CLI
//! workspaces have no `nx.json`; registration is skipped there.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::domain::ports::{FileSystem, MetadataOutcome, PersistenceError, ProjectMetadataStore};

pub const NX_JSON: &str = "nx.json";

pub struct NxJsonMetadataStore<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> NxJsonMetadataStore<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> ProjectMetadataStore for NxJsonMetadataStore<FS> {
    fn register(
        &self,
        root: &Path,
        project: &str,
        tags: &[String],
    ) -> Result<MetadataOutcome, PersistenceError> {
        let path = root.join(NX_JSON);

        let content = match self.fs.read(&path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                warn!(path = %path.display(), project, "no nx.json, skipping project metadata");
                return Ok(MetadataOutcome::Skipped);
            }
            Err(e) => return Err(PersistenceError::new(&path, e.to_string())),
        };

        let mut doc: Value = serde_json::from_str(&content)
            .map_err(|e| PersistenceError::new(&path, e.to_string()))?;
        let Some(config) = doc.as_object_mut() else {
            return Err(PersistenceError::new(&path, "expected a JSON object"));
        };

        let projects = config
            .entry("projects")
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(projects) = projects.as_object_mut() else {
            return Err(PersistenceError::new(&path, "'projects' is not an object"));
        };

        let mut entry = Map::new();
        entry.insert(
            "tags".to_string(),
            Value::Array(tags.iter().cloned().map(Value::String).collect()),
        );
        projects.insert(project.to_string(), Value::Object(entry));

        let mut rendered = serde_json::to_string_pretty(&doc)
            .map_err(|e| PersistenceError::new(&path, e.to_string()))?;
        rendered.push('\n');
        self.fs
            .write(&path, &rendered)
            .map_err(|e| PersistenceError::new(&path, e.to_string()))?;

        info!(path = %path.display(), project, "registered project metadata");
        Ok(MetadataOutcome::Registered)
    }
}
