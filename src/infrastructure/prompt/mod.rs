//! Prompt Implementations

mod terminal;

pub use terminal::DialoguerPrompt;
