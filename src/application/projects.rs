//! Project listing use case

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::ports::FileSystem;
use crate::domain::services::WorkspaceResolver;
use crate::error::WsverResult;

/// One project as shown by `wsver projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub root: String,
    pub targets: Vec<String>,
    /// `syncVersions` of the project's version target, if it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_versions: Option<bool>,
}

/// Resolve the workspace under `root` and summarize its projects.
///
/// `version_target` names the target whose `syncVersions` is reported.
pub fn list_projects<FS: FileSystem>(
    resolver: &WorkspaceResolver<FS>,
    root: &Path,
    version_target: &str,
) -> WsverResult<(PathBuf, Vec<ProjectSummary>)> {
    let resolved = resolver.resolve(root)?;

    let projects = resolved
        .definition
        .projects
        .iter()
        .map(|(name, project)| ProjectSummary {
            name: name.clone(),
            root: project.root.clone(),
            targets: project.targets().map(|(name, _)| name.to_string()).collect(),
            sync_versions: project
                .target(version_target)
                .and_then(|t| t.version_options())
                .map(|o| o.sync_versions),
        })
        .collect();

    Ok((resolved.path, projects))
}
