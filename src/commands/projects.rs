//! Projects command handler
//!
//! Lists the projects of the resolved workspace.

use std::path::Path;

use anyhow::Result;

use wsver::application::list_projects;
use wsver::infrastructure::LocalFs;
use wsver::{Config, WorkspaceResolver};

use crate::ui::output::render_projects;

pub fn cmd_projects(root: &Path, config: &Config, json: bool) -> Result<()> {
    let resolver = WorkspaceResolver::new(LocalFs::new());
    let (path, projects) = list_projects(&resolver, root, &config.version.target)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "projects",
            "path": path.display().to_string(),
            "projects": projects,
        }))?;
        return Ok(());
    }

    print!("{}", render_projects(&path, &projects));
    Ok(())
}
