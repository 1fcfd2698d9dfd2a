//! Jira project and issue payloads.

use serde::Deserialize;
use serde_json::Value;

/// A Jira project the user can import from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JiraProject {
    /// Numeric project id, as a string.
    pub id: String,

    /// Display name shown in the project prompt.
    pub name: String,
}

/// A Jira issue read from a search page.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceIssue {
    /// Issue key, e.g. `PROJ-12`.
    pub key: String,

    #[serde(default)]
    pub fields: SourceFields,
}

/// The subset of issue fields the migration reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceFields {
    #[serde(default)]
    pub summary: String,

    /// Rich-text description in Atlassian Document Format.
    #[serde(default)]
    pub description: Option<Value>,
}

impl SourceIssue {
    /// Builds an issue from its parts.
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        description: Option<Value>,
    ) -> Self {
        Self {
            key: key.into(),
            fields: SourceFields {
                summary: summary.into(),
                description,
            },
        }
    }

    /// Returns the issue summary.
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }

    /// Returns the raw description document, if any.
    pub fn description(&self) -> Option<&Value> {
        self.fields.description.as_ref()
    }
}

/// Pagination bounds for an issue search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based index of the first issue to return.
    pub start_at: u64,

    /// Maximum number of issues to return.
    pub max_results: u64,
}

/// One page of issue search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Total number of issues matching the query.
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub issues: Vec<SourceIssue>,
}

/// Response of the paged project listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectPage {
    #[serde(default)]
    pub values: Vec<JiraProject>,
}
