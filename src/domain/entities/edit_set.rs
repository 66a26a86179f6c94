//! Planned workspace edits
//!
//! An `EditSet` describes what the mutation planner wants to change without
//! touching any file. It is applied in memory and handed to the writer.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use super::workspace::{ProjectDefinition, TargetDefinition, WorkspaceDefinition};

/// A single planned change
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkspaceEdit {
    /// Insert (or replace) a whole project, and register it in the
    /// project-metadata store with the given tags
    AddProject {
        name: String,
        project: ProjectDefinition,
        tags: Vec<String>,
    },
    /// Insert (or replace) one target on an existing project
    AddTarget {
        project: String,
        target: String,
        definition: TargetDefinition,
    },
}

impl WorkspaceEdit {
    /// Name of the project this edit touches
    pub fn project_name(&self) -> &str {
        match self {
            WorkspaceEdit::AddProject { name, .. } => name,
            WorkspaceEdit::AddTarget { project, .. } => project,
        }
    }
}

impl fmt::Display for WorkspaceEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceEdit::AddProject { name, project, .. } => {
                write!(f, "add project '{}' (root '{}')", name, project.root)?;
                for (target, definition) in project.targets() {
                    write!(f, " with target '{}' [{}]", target, definition.builder)?;
                    if let Some(options) = definition.version_options() {
                        write!(f, " syncVersions={}", options.sync_versions)?;
                    }
                }
                Ok(())
            }
            WorkspaceEdit::AddTarget {
                project,
                target,
                definition,
            } => {
                write!(
                    f,
                    "add target '{}' [{}] to project '{}'",
                    target, definition.builder, project
                )?;
                if let Some(options) = definition.version_options() {
                    write!(f, " syncVersions={}", options.sync_versions)?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered list of planned edits
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EditSet {
    edits: Vec<WorkspaceEdit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: WorkspaceEdit) {
        self.edits.push(edit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkspaceEdit> {
        self.edits.iter()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Names of every project touched, in edit order
    pub fn touched_projects(&self) -> impl Iterator<Item = &str> {
        self.edits.iter().map(WorkspaceEdit::project_name)
    }

    /// Projects that must be registered in the metadata store
    pub fn metadata_entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edits.iter().filter_map(|edit| match edit {
            WorkspaceEdit::AddProject { name, tags, .. } => Some((name.as_str(), tags.as_slice())),
            WorkspaceEdit::AddTarget { .. } => None,
        })
    }

    /// One display line per edit
    pub fn summary(&self) -> Vec<String> {
        self.edits.iter().map(ToString::to_string).collect()
    }

    /// Apply the edits to an in-memory workspace.
    ///
    /// Last write wins: an existing project or target with the same name is
    /// replaced. Returns a label for every entry that was replaced. Targets
    /// aimed at a project the workspace does not declare are skipped.
    pub fn apply(&self, workspace: &mut WorkspaceDefinition) -> Vec<String> {
        let mut replaced = Vec::new();

        for edit in &self.edits {
            match edit {
                WorkspaceEdit::AddProject { name, project, .. } => {
                    if workspace
                        .projects
                        .insert(name.clone(), project.clone())
                        .is_some()
                    {
                        replaced.push(format!("project '{}'", name));
                    }
                }
                WorkspaceEdit::AddTarget {
                    project,
                    target,
                    definition,
                } => {
                    let Some(existing) = workspace.projects.get_mut(project) else {
                        warn!(project = %project, "skipping target for undeclared project");
                        continue;
                    };
                    if existing
                        .insert_target(target.clone(), definition.clone())
                        .is_some()
                    {
                        replaced.push(format!("target '{}:{}'", project, target));
                    }
                }
            }
        }

        replaced
    }
}

impl<'a> IntoIterator for &'a EditSet {
    type Item = &'a WorkspaceEdit;
    type IntoIter = std::slice::Iter<'a, WorkspaceEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

impl FromIterator<WorkspaceEdit> for EditSet {
    fn from_iter<I: IntoIterator<Item = WorkspaceEdit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}
