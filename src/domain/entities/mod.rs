//! Domain Entities

mod edit_set;
mod workspace;

pub use edit_set::{EditSet, WorkspaceEdit};
pub use workspace::{
    ProjectDefinition, TargetDefinition, VersionTargetOptions, WorkspaceDefinition,
    WorkspaceLayout,
};
