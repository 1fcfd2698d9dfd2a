//! Prompt error types.

use thiserror::Error;

/// Errors that can occur while prompting the user.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Terminal interaction failed (no TTY, interrupted, empty choice list).
    #[error("Prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// The prompt returned a choice that is not in the list.
    #[error("No valid choice selected for '{message}'")]
    NoChoice { message: String },
}
