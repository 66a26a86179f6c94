//! Project selector
//!
//! Turns a declarative name list or an interactive answer into a
//! `SelectionResult`. Unknown names are rejected rather than dropped.

use tracing::debug;

use crate::domain::entities::WorkspaceDefinition;
use crate::domain::ports::{Choice, MultiSelectQuestion, ProjectPrompt, PromptError};
use crate::domain::value_objects::SelectionResult;
use crate::error::{WsverError, WsverResult};

pub const SELECTION_MESSAGE: &str = "Which projects would you like to version independently?";

/// Select `requested` out of the workspace's projects.
///
/// The result follows workspace order. Any requested name the workspace does
/// not declare fails the whole selection with `UnknownProject`.
pub fn select_from_list(
    workspace: &WorkspaceDefinition,
    requested: &[String],
) -> WsverResult<SelectionResult> {
    let mut unknown: Vec<String> = Vec::new();
    for name in requested {
        if !workspace.contains_project(name) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }
    if !unknown.is_empty() {
        return Err(WsverError::UnknownProject { names: unknown });
    }

    Ok(workspace
        .project_names()
        .filter(|name| requested.iter().any(|r| r == name))
        .collect())
}

/// The question shown to the operator: every project, all checked.
pub fn selection_question(workspace: &WorkspaceDefinition) -> MultiSelectQuestion {
    MultiSelectQuestion {
        message: SELECTION_MESSAGE.to_string(),
        choices: workspace
            .project_names()
            .map(|name| Choice {
                name: name.to_string(),
                checked: true,
            })
            .collect(),
    }
}

/// Ask the operator which projects to version.
pub fn select_interactive<P: ProjectPrompt + ?Sized>(
    workspace: &WorkspaceDefinition,
    prompt: &P,
) -> WsverResult<SelectionResult> {
    let question = selection_question(workspace);
    let answer = prompt
        .multi_select(&question)
        .map_err(|err| WsverError::InteractionUnavailable {
            reason: match err {
                PromptError::Unavailable(reason) => reason,
                PromptError::Aborted => "prompt cancelled".to_string(),
            },
        })?;
    debug!(selected = answer.len(), offered = question.choices.len(), "interactive selection");

    select_from_list(workspace, &answer)
}
