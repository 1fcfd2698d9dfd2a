//! Jira client error types.

use thiserror::Error;

/// Errors that can occur while talking to Jira.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Transport or response decoding error.
    #[error("Jira request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Jira answered with a non-success status.
    #[error("Jira request to {endpoint} failed: status={status} body={body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
}
