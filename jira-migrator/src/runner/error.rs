//! Runner error types.

use crate::github::GitHubError;
use crate::jira::JiraError;
use crate::prompts::PromptError;
use crate::templates::TemplateError;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Jira listing or search errors.
    #[error(transparent)]
    Jira(#[from] JiraError),

    /// GitHub listing or issue creation errors.
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// The GitHub token did not resolve to a user login.
    #[error("Github authentication fail")]
    GitHubAuthentication,

    /// Interactive prompt errors.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Issue body rendering errors.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
