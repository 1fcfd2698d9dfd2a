//! Orchestrates a migration run.
//!
//! A run walks through its stages once, in order: Jira credentials, project
//! and status selection, GitHub organization/repository/label selection, a
//! confirmation, and the copy itself. Each stage feeds the next; nothing is
//! revisited.

mod config;
mod connector;
mod error;

pub use config::RunnerConfig;
pub use connector::{Connector, LiveConnector};
pub use error::RunnerError;

use crate::github::{GitHubApi, Repository};
use crate::jira::{JiraApi, JiraCredentials};
use crate::migration::{migrate, MigrationPlan};
use crate::progress::create_progress_bar;
use crate::prompts::{Choice, Prompter};
use crate::query::{IssueQuery, StatusFilter};
use crate::summary::RunSummary;
use crate::templates::TemplateRenderer;
use tracing::info;

/// Drives a migration run from the first prompt to the last created issue.
pub struct Runner<P, C> {
    config: RunnerConfig,
    prompter: P,
    connector: C,
    renderer: TemplateRenderer,
}

impl<P, C> Runner<P, C>
where
    P: Prompter,
    C: Connector,
{
    /// Builds a runner from its configuration and collaborators.
    pub fn new(config: RunnerConfig, prompter: P, connector: C) -> Self {
        Self {
            config,
            prompter,
            connector,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the prompter answering this run's questions.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Executes the full orchestration flow.
    ///
    /// Returns a summary with `confirmed == false` if the user declined the
    /// import; in that case no issue was created.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let credentials = collect_jira_credentials(&self.prompter)?;
        let jira_host = credentials.host.clone();
        let jira = self.connector.connect_jira(credentials)?;

        let (query, total) = select_issue_query(&self.prompter, &jira).await?;

        let token = self.prompter.secret("Github api token:")?;
        let github = self.connector.connect_github(token)?;
        let (repository, label) = select_github_target(&self.prompter, &github).await?;

        if !confirm_import(&self.prompter, total)? {
            info!("Import declined, nothing was created");
            return Ok(RunSummary::declined(total));
        }

        let plan = MigrationPlan {
            query,
            total,
            jira_host,
            repository,
            label,
        };
        let progress = create_progress_bar(total, self.config.show_progress());

        migrate(
            &jira,
            &github,
            &plan,
            &self.renderer,
            self.config.page_size(),
            &progress,
        )
        .await
    }
}

/// Asks for the Jira username, API token and host, in that order.
///
/// # Errors
///
/// Returns [`RunnerError::Prompt`] if the terminal interaction fails.
pub fn collect_jira_credentials<P: Prompter>(
    prompter: &P,
) -> Result<JiraCredentials, RunnerError> {
    let username = prompter.input("Jira username:")?;
    let api_token = prompter.secret("Jira api token:")?;
    let host = prompter.input("Jira host")?;

    Ok(JiraCredentials {
        username,
        api_token,
        host,
    })
}

/// Lets the user pick a project and status filter, and counts the matches.
///
/// Returns the composed query and the issue total Jira reports for it.
///
/// # Errors
///
/// Returns Jira errors from the project listing or the count search, and
/// prompt errors.
pub async fn select_issue_query<P, J>(
    prompter: &P,
    jira: &J,
) -> Result<(IssueQuery, u64), RunnerError>
where
    P: Prompter,
    J: JiraApi,
{
    let projects = jira.list_projects().await?;
    let project_id = prompter.select(
        "Which project to import?",
        projects
            .into_iter()
            .map(|project| Choice::new(project.name, project.id))
            .collect(),
    )?;

    let filter = prompter.select(
        "Import all issue or only not done",
        StatusFilter::OPTIONS
            .iter()
            .map(|filter| Choice::new(filter.label(), *filter))
            .collect(),
    )?;

    let query = IssueQuery::new(&project_id, filter);
    info!(jql = %query, "Counting matching issues");
    let total = jira.search_issues(query.as_str(), None).await?.total;

    Ok((query, total))
}

/// Verifies the GitHub login and lets the user pick the target repository
/// and label.
///
/// Returns the repository and the selected label name.
///
/// # Errors
///
/// Returns [`RunnerError::GitHubAuthentication`] when the token does not
/// resolve to a login, GitHub listing errors, and prompt errors.
pub async fn select_github_target<P, G>(
    prompter: &P,
    github: &G,
) -> Result<(Repository, String), RunnerError>
where
    P: Prompter,
    G: GitHubApi,
{
    let login = github
        .authenticated_login()
        .await?
        .ok_or(RunnerError::GitHubAuthentication)?;
    info!("Logged in github with user {login}.");

    let organizations = github.list_organizations().await?;
    let organization = prompter.select(
        "Select an organization from github",
        organizations
            .into_iter()
            .map(|org| Choice::new(org.login.clone(), org))
            .collect(),
    )?;

    let repositories = github.list_repositories(&organization.login).await?;
    let repository = prompter.select(
        &format!("Select a repository from {}", organization.login),
        repositories
            .into_iter()
            .map(|repo| Choice::new(repo.name.clone(), repo))
            .collect(),
    )?;

    let labels = github.list_labels(&repository).await?;
    let label = prompter.select(
        "Select a label",
        labels
            .into_iter()
            .map(|label| Choice::new(label.name.clone(), label.name))
            .collect(),
    )?;

    Ok((repository, label))
}

/// Asks for confirmation before anything is created. Defaults to "no".
///
/// # Errors
///
/// Returns [`RunnerError::Prompt`] if the terminal interaction fails.
pub fn confirm_import<P: Prompter>(prompter: &P, total: u64) -> Result<bool, RunnerError> {
    Ok(prompter.confirm(
        &format!("Are you sure that you want to import {total} issues?"),
        false,
    )?)
}
