//! Configuration module for wsver
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WSVER_*)
//! 3. Project config (`<root>/.wsver.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{Config, OutputConfig, Verbosity, VersionConfig, CONFIG_FILE};
