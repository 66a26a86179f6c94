//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `VersionSetup` - resolve the workspace, select projects, plan and persist
//!   the version target
//! - `list_projects` - resolve the workspace and report its projects

pub mod projects;
pub mod setup;

pub use projects::{list_projects, ProjectSummary};
pub use setup::{LocalVersionSetup, SetupOptions, SetupReport, VersionSetup};
