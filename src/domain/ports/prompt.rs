//! Project Prompt Port
//!
//! One multi-select question, answered with the names the operator kept
//! checked. Implementations can be interactive (a terminal prompt) or a
//! stand-in that refuses to ask.

use thiserror::Error;

/// One checkbox in the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub checked: bool,
}

/// A single multi-select question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectQuestion {
    pub message: String,
    pub choices: Vec<Choice>,
}

/// Why a prompt could not produce an answer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// There is no terminal to ask on
    #[error("{0}")]
    Unavailable(String),
    /// The operator cancelled the prompt
    #[error("prompt cancelled")]
    Aborted,
}

/// Trait for asking the operator to pick projects.
///
/// Implementations can be:
/// - `DialoguerPrompt`: terminal checkbox list
/// - `NonInteractivePrompt`: always unavailable
pub trait ProjectPrompt {
    /// Ask the question and return the confirmed names.
    fn multi_select(&self, question: &MultiSelectQuestion) -> Result<Vec<String>, PromptError>;
}

impl<T: ProjectPrompt + ?Sized> ProjectPrompt for Box<T> {
    fn multi_select(&self, question: &MultiSelectQuestion) -> Result<Vec<String>, PromptError> {
        (**self).multi_select(question)
    }
}

/// Prompt used when the caller has ruled out interaction (`--json`, CI).
pub struct NonInteractivePrompt;

impl ProjectPrompt for NonInteractivePrompt {
    fn multi_select(&self, _question: &MultiSelectQuestion) -> Result<Vec<String>, PromptError> {
        Err(PromptError::Unavailable(
            "running non-interactively".to_string(),
        ))
    }
}
