//! Issue title and body rendering.
//!
//! Bodies are rendered with Handlebars so the fixed layout lives in one
//! template; titles are plain formatting.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer, ISSUE_BODY_TEMPLATE};

/// Generates the GitHub issue title for a Jira issue.
///
/// Format: "{summary} [{key}]"
#[must_use]
pub fn generate_issue_title(summary: &str, key: &str) -> String {
    format!("{summary} [{key}]")
}

/// Generates the browse URL of a Jira issue.
///
/// Format: "{host}/browse/{key}"
#[must_use]
pub fn generate_browse_link(host: &str, key: &str) -> String {
    format!("{host}/browse/{key}")
}
