//! Terminal prompts backed by dialoguer.

use super::{Choice, PromptError, Prompter};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, message: &str) -> Result<String, PromptError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()?)
    }

    fn secret(&self, message: &str) -> Result<String, PromptError> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(message)
            .interact()?)
    }

    fn select<T>(&self, message: &str, choices: Vec<Choice<T>>) -> Result<T, PromptError> {
        let names: Vec<&str> = choices.iter().map(|choice| choice.name.as_str()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&names)
            .default(0)
            .interact()?;

        choices
            .into_iter()
            .nth(index)
            .map(|choice| choice.value)
            .ok_or_else(|| PromptError::NoChoice {
                message: message.to_string(),
            })
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }
}
