//! Interactive prompts.
//!
//! The runner only talks to [`Prompter`]; [`TerminalPrompter`] is the
//! dialoguer implementation used by the CLI.

mod choice;
mod error;
mod terminal;

pub use choice::Choice;
pub use error::PromptError;
pub use terminal::TerminalPrompter;

/// Interactive questions asked during a run.
pub trait Prompter {
    /// Asks for a non-empty line of text.
    fn input(&self, message: &str) -> Result<String, PromptError>;

    /// Asks for a non-empty line of text without echoing it.
    fn secret(&self, message: &str) -> Result<String, PromptError>;

    /// Asks the user to pick one of `choices`, returning its value.
    fn select<T>(&self, message: &str, choices: Vec<Choice<T>>) -> Result<T, PromptError>;

    /// Asks a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;
}
