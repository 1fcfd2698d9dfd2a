//! Jira access.
//!
//! [`JiraApi`] is the contract the migration needs from Jira: listing
//! projects and searching issues with JQL. [`JiraClient`] implements it
//! against the Jira Cloud REST API.

mod client;
mod description;
mod error;
mod issue;

pub use client::JiraClient;
pub use description::{extract_plain_text, LINE_SEPARATOR};
pub use error::JiraError;
pub use issue::{JiraProject, PageRequest, SearchPage, SourceFields, SourceIssue};

pub(crate) use issue::ProjectPage;

use async_trait::async_trait;

/// Credentials collected at startup.
#[derive(Debug, Clone)]
pub struct JiraCredentials {
    /// Account e-mail.
    pub username: String,
    /// API token.
    pub api_token: String,
    /// Site URL, e.g. `https://acme.atlassian.net`.
    pub host: String,
}

/// Jira operations used by the migration.
#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Lists the projects visible to the authenticated user.
    async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError>;

    /// Runs a JQL search.
    ///
    /// Without a [`PageRequest`] Jira's default bounds apply; callers use this
    /// to read the total.
    async fn search_issues(
        &self,
        jql: &str,
        page: Option<PageRequest>,
    ) -> Result<SearchPage, JiraError>;
}
