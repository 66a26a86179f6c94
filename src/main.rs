//! wsver CLI
//!
//! Usage: wsver <COMMAND>
//!
//! Commands:
//!   init      Add a version target to the workspace
//!   projects  List workspace projects and their targets

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use wsver::config::{self, Verbosity};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = match &cli.command {
        Commands::Init { root, .. } | Commands::Projects { root } => root.clone(),
    };

    let (config, warnings) = config::load_or_default(&root)?;
    init_tracing(cli.verbose, config.output.verbosity);
    if cli.json {
        for warning in &warnings {
            ui::json::emit(ui::json::config_warning_event(warning))?;
        }
    } else {
        ui::output::print_config_warnings(&warnings);
    }

    match cli.command {
        Commands::Init {
            root,
            sync_versions,
            projects,
            no_interactive,
            dry_run,
        } => commands::init::cmd_init(
            commands::init::InitArgs {
                root: &root,
                sync_versions,
                projects: &projects,
                no_interactive,
                dry_run,
            },
            &config,
            cli.json,
        ),
        Commands::Projects { root } => commands::projects::cmd_projects(&root, &config, cli.json),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` and the configured verbosity.
fn init_tracing(verbose: u8, configured: Verbosity) {
    let level = match verbose {
        0 => configured.filter_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wsver={level}")));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
