//! GitHub issue creation payload.

/// A GitHub issue to create for one Jira issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRequest {
    /// Jira key the issue was built from.
    pub source_key: String,

    /// Issue title.
    pub title: String,

    /// Rendered issue body.
    pub body: String,

    /// Labels applied on creation.
    pub labels: Vec<String>,
}
