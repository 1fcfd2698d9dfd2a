#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod github;
pub mod issues;
pub mod jira;
pub mod migration;
pub mod progress;
pub mod prompts;
pub mod query;
pub mod rate_limit;
pub mod runner;
pub mod summary;
pub mod templates;

pub use github::{GitHubApi, GitHubClient, GitHubError, Label, Organization, Repository};
pub use issues::{build_issue_request, CreatedIssue, IssueRequest};
pub use jira::{
    extract_plain_text, JiraApi, JiraClient, JiraCredentials, JiraError, JiraProject,
    PageRequest, SearchPage, SourceIssue,
};
pub use migration::{migrate, page_starts, MigrationPlan, DEFAULT_PAGE_SIZE};
pub use progress::create_progress_bar;
pub use prompts::{Choice, PromptError, Prompter, TerminalPrompter};
pub use query::{IssueQuery, StatusFilter};
pub use rate_limit::{
    check_core_rate_limit, ensure_core_rate_limit, required_wait, wait_if_needed, RateLimitInfo,
};
pub use runner::{
    collect_jira_credentials, confirm_import, select_github_target, select_issue_query,
    Connector, LiveConnector, Runner, RunnerConfig, RunnerError,
};
pub use summary::RunSummary;
pub use templates::{generate_issue_title, TemplateError, TemplateRenderer};
