//! Workspace persistence
//!
//! JSON implementations of the writer and project-metadata ports.

mod json_writer;
mod nx_json;

pub use json_writer::{render_workspace, JsonWorkspaceWriter};
pub use nx_json::{NxJsonMetadataStore, NX_JSON};
