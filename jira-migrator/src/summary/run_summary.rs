//! Run summary types.

use crate::issues::CreatedIssue;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Issue total reported by Jira before the migration started.
    pub issues_reported: u64,

    /// Whether the user confirmed the import.
    pub confirmed: bool,

    /// Number of Jira pages fetched during the migration.
    pub pages_fetched: usize,

    /// Number of Jira issues returned across all pages.
    pub issues_fetched: u64,

    /// Issues created on GitHub.
    pub created: Vec<CreatedIssue>,
}

impl RunSummary {
    /// Creates a summary for a run that stopped at the confirmation prompt.
    #[must_use]
    pub fn declined(issues_reported: u64) -> Self {
        Self {
            issues_reported,
            ..Default::default()
        }
    }

    /// Creates an empty summary for a confirmed run.
    #[must_use]
    pub fn confirmed(issues_reported: u64) -> Self {
        Self {
            issues_reported,
            confirmed: true,
            ..Default::default()
        }
    }

    /// Records one fetched page and the issues created from it.
    pub fn record_page(&mut self, fetched: u64, created: Vec<CreatedIssue>) {
        self.pages_fetched += 1;
        self.issues_fetched += fetched;
        self.created.extend(created);
    }

    /// Number of issues created on GitHub.
    #[must_use]
    pub fn issues_created(&self) -> usize {
        self.created.len()
    }
}
