use wsver::WsverError;

/// Follow-up advice for errors the operator can fix
fn hint(err: &WsverError) -> Option<&'static str> {
    match err {
        WsverError::WorkspaceNotFound { .. } => {
            Some("Run inside an Nx or Angular CLI workspace, or pass --root <dir>.")
        }
        WsverError::WorkspaceParse { .. } => Some("Fix the JSON in the workspace file and retry."),
        WsverError::UnknownProject { .. } => {
            Some("Run 'wsver projects' to list the declared projects.")
        }
        WsverError::EmptySelection => {
            Some("Select at least one project, or use --sync-versions.")
        }
        WsverError::InteractionUnavailable { .. } => {
            Some("Pass --projects a,b or --sync-versions.")
        }
        WsverError::Config { .. } => Some("Fix or remove .wsver.toml and retry."),
        _ => None,
    }
}

pub fn format_wsver_error(err: &WsverError) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = hint(err) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(wsver) = err.downcast_ref::<WsverError>() {
        return format_wsver_error(wsver);
    }

    format!("[ERROR] {}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(file) = err.downcast_ref::<WsverError>().and_then(WsverError::file) {
            output["file"] = serde_json::Value::String(file.display().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
