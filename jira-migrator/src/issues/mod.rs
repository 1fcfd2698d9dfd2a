//! Translation of Jira issues into GitHub issue requests.

mod created;
mod request;

pub use created::CreatedIssue;
pub use request::IssueRequest;

use crate::jira::{extract_plain_text, SourceIssue};
use crate::templates::{generate_issue_title, TemplateError, TemplateRenderer};

/// Builds the GitHub issue request for a Jira issue.
///
/// The title is `"<summary> [<key>]"`; the body holds the description's
/// plain text and a link back to `<host>/browse/<key>`; `label` is the only
/// label.
///
/// # Errors
///
/// Returns [`TemplateError`] if the body template fails to render.
pub fn build_issue_request(
    issue: &SourceIssue,
    jira_host: &str,
    label: &str,
    renderer: &TemplateRenderer,
) -> Result<IssueRequest, TemplateError> {
    let description = extract_plain_text(issue.description());
    let body = renderer.render_issue_body(&description, &issue.key, jira_host)?;

    Ok(IssueRequest {
        source_key: issue.key.clone(),
        title: generate_issue_title(issue.summary(), &issue.key),
        body,
        labels: vec![label.to_string()],
    })
}
