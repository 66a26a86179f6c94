//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `prompt/` - Terminal prompt
//! - `workspace/` - Workspace file writer and `nx.json` metadata store

pub mod fs;
pub mod prompt;
pub mod workspace;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use prompt::DialoguerPrompt;
pub use workspace::{JsonWorkspaceWriter, NxJsonMetadataStore};
