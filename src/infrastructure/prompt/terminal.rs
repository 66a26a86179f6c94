//! Terminal project prompt
//!
//! Implements the ProjectPrompt port with a dialoguer checkbox list.

use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;
use is_terminal::IsTerminal;

use crate::domain::ports::{MultiSelectQuestion, ProjectPrompt, PromptError};

/// Checkbox prompt on stderr. Space toggles, enter confirms, esc cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectPrompt for DialoguerPrompt {
    fn multi_select(&self, question: &MultiSelectQuestion) -> Result<Vec<String>, PromptError> {
        if !std::io::stdin().is_terminal() {
            return Err(PromptError::Unavailable(
                "stdin is not a terminal".to_string(),
            ));
        }

        let items: Vec<&str> = question.choices.iter().map(|c| c.name.as_str()).collect();
        let defaults: Vec<bool> = question.choices.iter().map(|c| c.checked).collect();

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(question.message.as_str())
            .items(&items)
            .defaults(&defaults)
            .interact_opt()
            .map_err(|e| PromptError::Unavailable(e.to_string()))?;

        let Some(indices) = selection else {
            return Err(PromptError::Aborted);
        };

        Ok(indices
            .into_iter()
            .filter_map(|i| question.choices.get(i))
            .map(|c| c.name.clone())
            .collect())
    }
}
