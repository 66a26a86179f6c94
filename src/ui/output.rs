use std::fmt::Write as _;
use std::path::Path;

use wsver::application::ProjectSummary;
use wsver::config::ConfigWarning;
use wsver::domain::ports::MetadataOutcome;
use wsver::{SetupReport, VersioningMode};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn mode_label(mode: &VersioningMode) -> String {
    match mode {
        VersioningMode::Synchronized => "synchronized".to_string(),
        VersioningMode::Independent(selection) => {
            format!("independent ({} project(s))", selection.len())
        }
    }
}

pub fn render_report(report: &SetupReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Workspace: {}", report.workspace_path.display());
    let _ = writeln!(out, "Mode: {}", mode_label(&report.mode));

    for line in report.edits.summary() {
        let _ = writeln!(out, "  + {}", line);
    }
    for label in &report.replaced {
        let _ = writeln!(out, "  ~ replaced existing {}", label);
    }

    if !report.persisted {
        let _ = writeln!(out, "Dry run: nothing written.");
        return out;
    }

    let _ = writeln!(out, "✓ Wrote {}", report.workspace_path.display());
    for (project, outcome) in &report.metadata {
        match outcome {
            MetadataOutcome::Registered => {
                let _ = writeln!(out, "✓ Registered '{}' in nx.json", project);
            }
            MetadataOutcome::Skipped => {
                let _ = writeln!(out, "  No nx.json, skipped metadata for '{}'", project);
            }
        }
    }
    out
}

pub fn render_projects(path: &Path, projects: &[ProjectSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Workspace: {}", path.display());
    if projects.is_empty() {
        let _ = writeln!(out, "No projects declared.");
        return out;
    }

    let width = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for project in projects {
        let version = match project.sync_versions {
            Some(true) => " [version: synced]",
            Some(false) => " [version: independent]",
            None => "",
        };
        let _ = writeln!(
            out,
            "  {:width$}  {}{}",
            project.name,
            project.root,
            version,
            width = width
        );
        if !project.targets.is_empty() {
            let _ = writeln!(out, "  {:width$}  targets: {}", "", project.targets.join(", "), width = width);
        }
    }
    out
}
