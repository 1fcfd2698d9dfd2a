//! GitHub client error types.

use thiserror::Error;

/// Errors that can occur while talking to GitHub.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Rate limit exhausted with no reset in sight.
    #[error("Rate limit exceeded, reset at {reset_at}")]
    RateLimitExceeded { reset_at: u64 },
}
