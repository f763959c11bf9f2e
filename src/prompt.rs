//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Source of answers for the interactive questions.
pub trait Prompter {
    /// Asks for free text. Empty input is accepted.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `choices`, returning its index.
    fn select(&self, prompt: &str, choices: &[String]) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, choices: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(choices)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
