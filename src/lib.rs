//! wsver - version target setup for Angular CLI and Nx workspaces
//!
//! Resolves a monorepo's `workspace.json` / `angular.json`, chooses which
//! projects get a `version` target, and writes the target either once for
//! the whole workspace (synchronized) or per project (independent).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{SetupOptions, SetupReport, VersionSetup};
pub use config::Config;
pub use domain::entities::{
    EditSet, ProjectDefinition, TargetDefinition, VersionTargetOptions, WorkspaceDefinition,
    WorkspaceEdit,
};
pub use domain::services::{
    plan_mutations, select_from_list, select_interactive, MutationPlanner, ResolvedWorkspace,
    WorkspaceResolver,
};
pub use domain::value_objects::{
    CandidateFiles, Selection, SelectionResult, VersioningMode, VersioningRequest,
};
pub use error::{WsverError, WsverResult};
