//! Rate limiting utilities for GitHub API.
//!
//! Before a mutation the core rate limit is inspected; when the remaining
//! quota is nearly exhausted we log and sleep until the window resets, then
//! let the request go through. Secondary rate limits only show up as a
//! rejected request, which is retried after a pause.

use crate::github::GitHubError;
use octocrab::Octocrab;
use std::time::Duration;
use tracing::{info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Rate limit information for a specific resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

/// Checks the current rate limit status for core API (issues, repos, etc.).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Returns how many seconds to wait before the next request, if any.
///
/// # Errors
///
/// Returns [`GitHubError::RateLimitExceeded`] when the quota is exhausted and
/// the reset lies further away than we are willing to wait.
pub fn required_wait(info: &RateLimitInfo, now: u64) -> Result<Option<u64>, GitHubError> {
    if info.remaining >= MIN_REMAINING_THRESHOLD || info.reset <= now {
        return Ok(None);
    }

    let wait_secs = info.reset - now;
    if wait_secs > MAX_WAIT_SECS {
        return Err(GitHubError::RateLimitExceeded {
            reset_at: info.reset,
        });
    }

    Ok(Some(wait_secs))
}

/// Waits if the rate limit is low, returning true if we waited.
///
/// # Arguments
///
/// * `info` - Current rate limit information
/// * `request` - Description of the request about to be sent, for logging
///
/// # Errors
///
/// See [`required_wait`].
pub async fn wait_if_needed(info: &RateLimitInfo, request: &str) -> Result<bool, GitHubError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(wait_secs) = required_wait(info, now)? else {
        return Ok(false);
    };

    warn!(
        remaining = info.remaining,
        limit = info.limit,
        "Request quota exhausted for request {request}"
    );
    warn!("Retrying after {wait_secs} seconds!");

    tokio::time::sleep(Duration::from_secs(wait_secs)).await;
    info!("Rate limit window reset, resuming");
    Ok(true)
}

/// Ensures sufficient rate limit before making core API calls.
///
/// A failed quota lookup is logged and the request proceeds unchecked.
///
/// # Errors
///
/// Returns [`GitHubError::RateLimitExceeded`] if the reset is too far away.
pub async fn ensure_core_rate_limit(
    octocrab: &Octocrab,
    request: &str,
) -> Result<(), GitHubError> {
    match check_core_rate_limit(octocrab).await {
        Ok(info) => {
            wait_if_needed(&info, request).await?;
        }
        Err(error) => {
            warn!(error = %error, "Could not read the rate limit for request {request}");
        }
    }
    Ok(())
}

/// Returns true if GitHub rejected a request because of a secondary rate
/// limit.
pub fn is_secondary_rate_limit(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            matches!(source.status_code.as_u16(), 403 | 429)
                && source
                    .message
                    .to_ascii_lowercase()
                    .contains("secondary rate limit")
        }
        _ => false,
    }
}

/// Logs a secondary rate limit hit and sleeps before the retry.
pub async fn wait_for_secondary_rate_limit(request: &str, delay: Duration) {
    warn!("SecondaryRateLimit detected for request {request}");
    warn!("Retrying after {} seconds!", delay.as_secs());
    tokio::time::sleep(delay).await;
}
