//! Mutation planning service
//!
//! Pure domain logic: given a workspace and a versioning mode, describe the
//! edits that register the version target. No I/O.

use crate::domain::entities::{
    EditSet, ProjectDefinition, TargetDefinition, VersionTargetOptions, WorkspaceDefinition,
    WorkspaceEdit,
};
use crate::domain::value_objects::VersioningMode;
use crate::error::{WsverError, WsverResult};

/// Name of the project created for synchronized versioning
pub const SYNTHETIC_PROJECT: &str = "workspace";

/// Target name and builder written by the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTargetSpec {
    pub target_name: String,
    pub builder: String,
}

impl VersionTargetSpec {
    pub const DEFAULT_TARGET: &'static str = "version";
    pub const DEFAULT_BUILDER: &'static str = "@jscutlery/semver:version";

    fn target(&self, sync_versions: bool) -> TargetDefinition {
        TargetDefinition::version(self.builder.clone(), VersionTargetOptions { sync_versions })
    }
}

impl Default for VersionTargetSpec {
    fn default() -> Self {
        Self {
            target_name: Self::DEFAULT_TARGET.to_string(),
            builder: Self::DEFAULT_BUILDER.to_string(),
        }
    }
}

/// Pure planning service
#[derive(Debug, Clone, Default)]
pub struct MutationPlanner {
    spec: VersionTargetSpec,
}

impl MutationPlanner {
    pub fn new(spec: VersionTargetSpec) -> Self {
        Self { spec }
    }

    /// Plan the edits for `mode`.
    ///
    /// Synchronized mode ignores the existing projects and always yields one
    /// `AddProject` for `workspace`. Independent mode yields one `AddTarget`
    /// per selected project in workspace order, and rejects an empty
    /// selection or names the workspace does not declare.
    pub fn plan(
        &self,
        workspace: &WorkspaceDefinition,
        mode: &VersioningMode,
    ) -> WsverResult<EditSet> {
        match mode {
            VersioningMode::Synchronized => Ok(self.plan_synchronized()),
            VersioningMode::Independent(selection) => {
                if selection.is_empty() {
                    return Err(WsverError::EmptySelection);
                }

                let unknown: Vec<String> = selection
                    .iter()
                    .filter(|name| !workspace.contains_project(name))
                    .map(str::to_string)
                    .collect();
                if !unknown.is_empty() {
                    return Err(WsverError::UnknownProject { names: unknown });
                }

                Ok(workspace
                    .project_names()
                    .filter(|name| selection.contains(name))
                    .map(|name| WorkspaceEdit::AddTarget {
                        project: name.to_string(),
                        target: self.spec.target_name.clone(),
                        definition: self.spec.target(false),
                    })
                    .collect())
            }
        }
    }

    fn plan_synchronized(&self) -> EditSet {
        let project = ProjectDefinition::new(".")
            .with_target(self.spec.target_name.clone(), self.spec.target(true));

        std::iter::once(WorkspaceEdit::AddProject {
            name: SYNTHETIC_PROJECT.to_string(),
            project,
            tags: Vec::new(),
        })
        .collect()
    }
}

/// Plan with the default target name and builder
pub fn plan_mutations(
    workspace: &WorkspaceDefinition,
    mode: &VersioningMode,
) -> WsverResult<EditSet> {
    MutationPlanner::default().plan(workspace, mode)
}
