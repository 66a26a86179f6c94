use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wsver - register version targets in Angular CLI and Nx workspaces
#[derive(Parser, Debug)]
#[command(name = "wsver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a version target to the workspace
    Init {
        /// Workspace root (directory containing workspace.json or angular.json)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Version every project together through one `workspace` project
        #[arg(long)]
        sync_versions: bool,

        /// Projects to version independently (prompts when omitted)
        #[arg(short, long, value_delimiter = ',')]
        projects: Vec<String>,

        /// Never prompt; fail if projects would have to be asked for
        #[arg(long)]
        no_interactive: bool,

        /// Show the planned edits without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List workspace projects and their targets
    Projects {
        /// Workspace root (directory containing workspace.json or angular.json)
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
