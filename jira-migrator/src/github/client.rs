//! GitHub client backed by octocrab.

use super::{GitHubApi, GitHubError, Label, Organization, Repository};
use crate::issues::{CreatedIssue, IssueRequest};
use crate::rate_limit::{
    ensure_core_rate_limit, is_secondary_rate_limit, wait_for_secondary_rate_limit,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info_span, Instrument};

/// Repositories fetched for selection; later pages are not requested.
pub const REPOSITORIES_PER_PAGE: u8 = 100;

/// Times a creation rejected by a secondary rate limit is retried.
const SECONDARY_RATE_LIMIT_RETRIES: u32 = 3;

/// Pause before retrying after a secondary rate limit.
const SECONDARY_RATE_LIMIT_DELAY: Duration = Duration::from_secs(60);

/// Payload of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Serialize)]
struct NewIssue<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

/// The fields of a created issue the migration reports.
#[derive(Debug, Deserialize)]
struct IssueResponse {
    number: u64,
    html_url: String,
}

/// GitHub client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    secondary_retry_delay: Duration,
}

impl GitHubClient {
    /// Builds a client for the given token.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Api`] if the client cannot be built.
    pub fn new(token: String) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self {
            octocrab,
            secondary_retry_delay: SECONDARY_RATE_LIMIT_DELAY,
        })
    }

    /// Builds a client talking to another API root, without retry pauses.
    #[cfg(test)]
    pub(crate) fn with_base_uri(token: String, base_uri: String) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .base_uri(base_uri)?
            .personal_token(token)
            .build()?;
        Ok(Self {
            octocrab,
            secondary_retry_delay: Duration::ZERO,
        })
    }

    async fn post_issue(
        &self,
        route: &str,
        path: &str,
        payload: &NewIssue<'_>,
    ) -> Result<IssueResponse, GitHubError> {
        let mut retries = 0;
        loop {
            ensure_core_rate_limit(&self.octocrab, route).await?;

            match self.octocrab.post(path, Some(payload)).await {
                Ok(issue) => return Ok(issue),
                Err(error)
                    if retries < SECONDARY_RATE_LIMIT_RETRIES && is_secondary_rate_limit(&error) =>
                {
                    retries += 1;
                    wait_for_secondary_rate_limit(route, self.secondary_retry_delay).await;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn authenticated_login(&self) -> Result<Option<String>, GitHubError> {
        let user: Value = self.octocrab.get("/user", None::<&()>).await?;
        Ok(user["login"]
            .as_str()
            .filter(|login| !login.is_empty())
            .map(str::to_string))
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, GitHubError> {
        Ok(self.octocrab.get("/user/orgs", None::<&()>).await?)
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError> {
        let page = self
            .octocrab
            .orgs(org)
            .list_repos()
            .per_page(REPOSITORIES_PER_PAGE)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|repo| Repository {
                owner: repo
                    .owner
                    .map(|owner| owner.login)
                    .unwrap_or_else(|| org.to_string()),
                name: repo.name,
            })
            .collect())
    }

    async fn list_labels(&self, repository: &Repository) -> Result<Vec<Label>, GitHubError> {
        let page = self
            .octocrab
            .issues(&repository.owner, &repository.name)
            .list_labels_for_repo()
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|label| Label { name: label.name })
            .collect())
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        request: &IssueRequest,
    ) -> Result<CreatedIssue, GitHubError> {
        let span = info_span!(
            "create_issue",
            repo = %repository.full_name(),
            source = %request.source_key
        );

        async {
            let path = format!("/repos/{}/issues", repository.full_name());
            let route = format!("POST {path}");
            let payload = NewIssue {
                title: &request.title,
                body: &request.body,
                labels: &request.labels,
            };

            let issue = self.post_issue(&route, &path, &payload).await?;

            debug!(issue_number = issue.number, "Issue created");
            Ok(CreatedIssue {
                source_key: request.source_key.clone(),
                number: issue.number,
                url: issue.html_url,
            })
        }
        .instrument(span)
        .await
    }
}
