//! Common test utilities for wsver CLI tests.
//!
//! `TestWorkspace` owns a temp directory holding a workspace file and runs
//! the binary against it with a clean environment.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Nx v1 style workspace with three projects
pub const WORKSPACE_V1: &str = r#"{
  "version": 1,
  "projects": {
    "a": {
      "root": "packages/a"
    },
    "b": {
      "root": "packages/b",
      "architect": {
        "build": {
          "builder": "@nrwl/node:build"
        }
      }
    },
    "c": {
      "root": "packages/c"
    }
  }
}
"#;

/// Nx v2 style workspace using `targets`/`executor`
pub const WORKSPACE_V2: &str = r#"{
  "version": 2,
  "projects": {
    "api": {
      "root": "apps/api",
      "targets": {
        "serve": {
          "executor": "@nrwl/node:execute"
        }
      }
    },
    "lib": {
      "root": "libs/lib"
    }
  }
}
"#;

pub const NX_JSON: &str = r#"{
  "npmScope": "acme",
  "projects": {
    "a": {
      "tags": []
    }
  }
}
"#;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    pub fn read_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(name)).unwrap()
    }

    /// `wsver` with the workspace as working directory and no ambient config
    pub fn wsver(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wsver"));
        cmd.current_dir(self.root())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("WSVER_BUILDER")
            .env_remove("WSVER_TARGET_NAME")
            .env_remove("WSVER_VERBOSITY");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.wsver().args(args).output().unwrap()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse NDJSON stdout into events
pub fn events(output: &Output) -> Vec<serde_json::Value> {
    stdout(output)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("expected one JSON object per line"))
        .collect()
}

#[macro_export]
macro_rules! assert_success {
    ($output:expr) => {
        assert!(
            $output.status.success(),
            "command failed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&$output.stdout),
            String::from_utf8_lossy(&$output.stderr)
        );
    };
}
