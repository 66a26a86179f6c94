//! Configuration types

use serde::{Deserialize, Serialize};

use crate::domain::services::VersionTargetSpec;
/// Project config file name, looked up in the workspace root
pub const CONFIG_FILE: &str = ".wsver.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// The target registered on projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_builder")]
    pub builder: String,
}

fn default_target() -> String {
    VersionTargetSpec::DEFAULT_TARGET.to_string()
}

fn default_builder() -> String {
    VersionTargetSpec::DEFAULT_BUILDER.to_string()
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            builder: default_builder(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

impl Config {
    /// Target name and builder for the mutation planner
    pub fn version_target(&self) -> VersionTargetSpec {
        VersionTargetSpec {
            target_name: self.version.target.clone(),
            builder: self.version.builder.clone(),
        }
    }
}
