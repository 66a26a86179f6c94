//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod persistence;
pub mod prompt;

pub use file_system::{FileSystem, FsError, FsResult};
pub use persistence::{MetadataOutcome, PersistenceError, ProjectMetadataStore, WorkspaceWriter};
pub use prompt::{Choice, MultiSelectQuestion, NonInteractivePrompt, ProjectPrompt, PromptError};
