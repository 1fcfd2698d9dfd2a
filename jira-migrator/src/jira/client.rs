//! Jira Cloud REST client.

use super::{
    JiraApi, JiraCredentials, JiraError, JiraProject, PageRequest, ProjectPage, SearchPage,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fields requested for every issue in a search.
const SEARCH_FIELDS: &str = "summary,description";

/// Jira client authenticating with an e-mail and API token.
pub struct JiraClient {
    base_url: String,
    http: Client,
    credentials: JiraCredentials,
}

impl JiraClient {
    /// Builds a client for the credentials' host.
    ///
    /// No request is made here; bad hosts or credentials surface on the
    /// first API call.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Http`] if the HTTP client cannot be built.
    pub fn new(credentials: JiraCredentials) -> Result<Self, JiraError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: format!("{}/rest/api/3", credentials.host.trim_end_matches('/')),
            http,
            credentials,
        })
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.credentials.username, Some(&self.credentials.api_token))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, JiraError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "Sending Jira request");

        let response = self
            .with_auth(self.http.get(&url))
            .query(query)
            .send()
            .await?;

        Ok(ensure_success(endpoint, response).await?.json().await?)
    }
}

async fn ensure_success(endpoint: &str, response: Response) -> Result<Response, JiraError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(JiraError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
    })
}

/// Builds the query string of an issue search.
fn search_params(jql: &str, page: Option<PageRequest>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("jql", jql.to_string()),
        ("fields", SEARCH_FIELDS.to_string()),
    ];
    if let Some(page) = page {
        params.push(("startAt", page.start_at.to_string()));
        params.push(("maxResults", page.max_results.to_string()));
    }
    params
}

#[async_trait]
impl JiraApi for JiraClient {
    async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError> {
        let page: ProjectPage = self.get_json("project/search", &[]).await?;
        Ok(page.values)
    }

    async fn search_issues(
        &self,
        jql: &str,
        page: Option<PageRequest>,
    ) -> Result<SearchPage, JiraError> {
        self.get_json("search", &search_params(jql, page)).await
    }
}
