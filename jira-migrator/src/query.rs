//! JQL composition for the issues to migrate.

use std::fmt;

/// Which issues of the project to import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Only issues whose status is not `done`.
    NotDone,
    /// Every issue regardless of status.
    All,
}

impl StatusFilter {
    /// Every filter, in prompt order.
    pub const OPTIONS: [StatusFilter; 2] = [StatusFilter::NotDone, StatusFilter::All];

    /// Label shown in the filter prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotDone => "Not done",
            Self::All => "All",
        }
    }

    /// JQL fragment appended after the project clause.
    #[must_use]
    pub fn fragment(self) -> &'static str {
        match self {
            Self::NotDone => " and status != done",
            Self::All => "",
        }
    }
}

/// The JQL query selecting the issues to migrate.
///
/// Built once and reused for the count fetch and every page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery(String);

impl IssueQuery {
    /// Composes the query for a project and status filter.
    ///
    /// Epics are always excluded and results are ordered newest first.
    #[must_use]
    pub fn new(project_id: &str, filter: StatusFilter) -> Self {
        Self(format!(
            "project = {project_id}{} AND type != Epic order by created DESC",
            filter.fragment()
        ))
    }

    /// Returns the JQL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
