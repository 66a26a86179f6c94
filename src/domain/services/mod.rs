//! Domain Services
//!
//! Workspace resolution, project selection and mutation planning.
//! Only the resolver and the interactive selector touch a port.

mod planner;
mod resolver;
mod selector;

pub use planner::{plan_mutations, MutationPlanner, VersionTargetSpec, SYNTHETIC_PROJECT};
pub use resolver::{parse_workspace, ResolvedWorkspace, WorkspaceResolver};
pub use selector::{select_from_list, select_interactive, selection_question, SELECTION_MESSAGE};
