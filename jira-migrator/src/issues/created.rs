//! Created issue information.

/// A GitHub issue created by the migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Jira key the issue was built from.
    pub source_key: String,

    /// GitHub issue number.
    pub number: u64,

    /// GitHub issue URL.
    pub url: String,
}
