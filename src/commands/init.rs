//! Init command handler
//!
//! Registers the version target: synchronized, declarative or interactive.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use wsver::domain::ports::{MetadataOutcome, NonInteractivePrompt, ProjectPrompt};
use wsver::domain::services::MutationPlanner;
use wsver::infrastructure::DialoguerPrompt;
use wsver::{Config, SetupOptions, SetupReport, VersionSetup};

use crate::ui::json::emit;
use crate::ui::output::{mode_label, render_report};

pub struct InitArgs<'a> {
    pub root: &'a Path,
    pub sync_versions: bool,
    pub projects: &'a [String],
    pub no_interactive: bool,
    pub dry_run: bool,
}

pub fn cmd_init(args: InitArgs<'_>, config: &Config, json: bool) -> Result<()> {
    let prompt: Box<dyn ProjectPrompt> = if json || args.no_interactive {
        Box::new(NonInteractivePrompt)
    } else {
        Box::new(DialoguerPrompt::new())
    };

    let setup = VersionSetup::local(prompt, MutationPlanner::new(config.version_target()));
    let options = SetupOptions::from_schema(args.sync_versions, args.projects).dry_run(args.dry_run);

    let report = setup.run(args.root, &options)?;

    if json {
        emit_json(&report)?;
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

fn emit_json(report: &SetupReport) -> Result<()> {
    emit(json!({
        "event": "resolved",
        "path": report.workspace_path.display().to_string(),
        "mode": mode_label(&report.mode),
    }))?;

    for edit in &report.edits {
        let mut event = serde_json::to_value(edit)?;
        event["event"] = json!("edit");
        emit(event)?;
    }
    for label in &report.replaced {
        emit(json!({ "event": "replaced", "entry": label }))?;
    }

    if !report.persisted {
        emit(json!({ "event": "dry_run", "edits": report.edits.len() }))?;
        return Ok(());
    }

    emit(json!({
        "event": "written",
        "path": report.workspace_path.display().to_string(),
        "edits": report.edits.len(),
    }))?;
    for (project, outcome) in &report.metadata {
        let outcome = match outcome {
            MetadataOutcome::Registered => "registered",
            MetadataOutcome::Skipped => "skipped",
        };
        emit(json!({ "event": "metadata", "project": project, "outcome": outcome }))?;
    }
    Ok(())
}
