//! Construction of authenticated clients from collected credentials.

use super::RunnerError;
use crate::github::{GitHubApi, GitHubClient};
use crate::jira::{JiraApi, JiraClient, JiraCredentials};

/// Builds the Jira and GitHub clients once their credentials are known.
pub trait Connector {
    type Jira: JiraApi;
    type GitHub: GitHubApi;

    /// Builds the Jira client.
    fn connect_jira(&self, credentials: JiraCredentials) -> Result<Self::Jira, RunnerError>;

    /// Builds the GitHub client.
    fn connect_github(&self, token: String) -> Result<Self::GitHub, RunnerError>;
}

impl<C: Connector + ?Sized> Connector for &C {
    type Jira = C::Jira;
    type GitHub = C::GitHub;

    fn connect_jira(&self, credentials: JiraCredentials) -> Result<Self::Jira, RunnerError> {
        (**self).connect_jira(credentials)
    }

    fn connect_github(&self, token: String) -> Result<Self::GitHub, RunnerError> {
        (**self).connect_github(token)
    }
}

/// Connects to the real Jira and GitHub APIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveConnector;

impl Connector for LiveConnector {
    type Jira = JiraClient;
    type GitHub = GitHubClient;

    fn connect_jira(&self, credentials: JiraCredentials) -> Result<JiraClient, RunnerError> {
        Ok(JiraClient::new(credentials)?)
    }

    fn connect_github(&self, token: String) -> Result<GitHubClient, RunnerError> {
        Ok(GitHubClient::new(token)?)
    }
}
