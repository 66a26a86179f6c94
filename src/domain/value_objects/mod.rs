//! Value Objects

mod candidates;
mod selection;

pub use candidates::{CandidateFiles, WORKSPACE_CANDIDATES};
pub use selection::{Selection, SelectionResult, VersioningMode, VersioningRequest};
