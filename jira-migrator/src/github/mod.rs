//! GitHub access.
//!
//! [`GitHubApi`] is what the migration needs from GitHub: the login of the
//! token's user, the organizations, repositories and labels to pick from,
//! and issue creation. [`GitHubClient`] implements it with octocrab.

mod client;
mod error;
mod types;

pub use client::{GitHubClient, REPOSITORIES_PER_PAGE};
pub use error::GitHubError;
pub use types::{Label, Organization, Repository};

use crate::issues::{CreatedIssue, IssueRequest};
use async_trait::async_trait;

/// GitHub operations used by the migration.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Returns the login of the authenticated user, or `None` when the
    /// response carries no login.
    async fn authenticated_login(&self) -> Result<Option<String>, GitHubError>;

    /// Lists the organizations of the authenticated user.
    async fn list_organizations(&self) -> Result<Vec<Organization>, GitHubError>;

    /// Lists the first page (up to 100) of an organization's repositories.
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError>;

    /// Lists the labels of a repository.
    async fn list_labels(&self, repository: &Repository) -> Result<Vec<Label>, GitHubError>;

    /// Creates an issue.
    async fn create_issue(
        &self,
        repository: &Repository,
        request: &IssueRequest,
    ) -> Result<CreatedIssue, GitHubError>;
}
