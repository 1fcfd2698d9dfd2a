//! In-memory stand-ins for Jira, GitHub, the terminal and the connector.

#![allow(dead_code)]

use async_trait::async_trait;
use jira_migrator::{
    Choice, Connector, CreatedIssue, GitHubApi, GitHubError, IssueRequest, JiraApi,
    JiraCredentials, JiraError, JiraProject, Label, Organization, PageRequest, PromptError,
    Prompter, Repository, RunnerError, SearchPage, SourceIssue,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Number of issues Jira returns when a search has no bounds.
const DEFAULT_MAX_RESULTS: usize = 50;

/// Shared, ordered record of what the fakes were asked to do.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

pub fn issue(key: &str, summary: &str, paragraph: Option<&str>) -> SourceIssue {
    let description = paragraph.map(|text| {
        json!({
            "type": "doc",
            "version": 1,
            "content": [{"type": "paragraph", "content": [{"type": "text", "text": text}]}]
        })
    });
    SourceIssue::new(key, summary, description)
}

/// `count` issues keyed `PROJ-<count>` down to `PROJ-1`, newest first.
pub fn issues(count: usize) -> Vec<SourceIssue> {
    (1..=count)
        .rev()
        .map(|n| issue(&format!("PROJ-{n}"), &format!("Issue {n}"), None))
        .collect()
}

struct JiraState {
    projects: Vec<JiraProject>,
    issues: Mutex<Vec<SourceIssue>>,
    /// Total reported by an unbounded search; defaults to the issue count.
    reported_total: Option<u64>,
    searches: Mutex<Vec<(String, Option<PageRequest>)>>,
    journal: Journal,
}

#[derive(Clone)]
pub struct FakeJira {
    state: Arc<JiraState>,
}

impl FakeJira {
    pub fn new(issues: Vec<SourceIssue>, journal: Journal) -> Self {
        Self::with_reported_total(issues, None, journal)
    }

    /// A Jira whose count search reports `reported_total` regardless of how
    /// many issues the paged searches return.
    pub fn with_reported_total(
        issues: Vec<SourceIssue>,
        reported_total: Option<u64>,
        journal: Journal,
    ) -> Self {
        Self {
            state: Arc::new(JiraState {
                projects: vec![
                    JiraProject {
                        id: "10001".to_string(),
                        name: "Project".to_string(),
                    },
                    JiraProject {
                        id: "10002".to_string(),
                        name: "Operations".to_string(),
                    },
                ],
                issues: Mutex::new(issues),
                reported_total,
                searches: Mutex::new(Vec::new()),
                journal,
            }),
        }
    }

    pub fn searches(&self) -> Vec<(String, Option<PageRequest>)> {
        self.state.searches.lock().unwrap().clone()
    }

    /// Start offsets of the paged searches, in order.
    pub fn page_starts(&self) -> Vec<u64> {
        self.searches()
            .into_iter()
            .filter_map(|(_, page)| page.map(|p| p.start_at))
            .collect()
    }
}

#[async_trait]
impl JiraApi for FakeJira {
    async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError> {
        Ok(self.state.projects.clone())
    }

    async fn search_issues(
        &self,
        jql: &str,
        page: Option<PageRequest>,
    ) -> Result<SearchPage, JiraError> {
        self.state
            .searches
            .lock()
            .unwrap()
            .push((jql.to_string(), page));

        let issues = self.state.issues.lock().unwrap().clone();
        let (start, max) = match page {
            Some(page) => {
                self.state.journal.push(format!("search {}", page.start_at));
                (page.start_at as usize, page.max_results as usize)
            }
            None => {
                self.state.journal.push("count".to_string());
                let total = self.state.reported_total.unwrap_or(issues.len() as u64);
                return Ok(SearchPage {
                    total,
                    issues: issues.into_iter().take(DEFAULT_MAX_RESULTS).collect(),
                });
            }
        };

        Ok(SearchPage {
            total: issues.len() as u64,
            issues: issues.into_iter().skip(start).take(max).collect(),
        })
    }
}

struct GitHubState {
    login: Option<String>,
    organizations: Vec<Organization>,
    repositories: Vec<Repository>,
    labels: Vec<Label>,
    /// Creation of the issue built from this Jira key fails.
    fail_on: Option<String>,
    created: Mutex<Vec<(Repository, IssueRequest)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    journal: Journal,
}

#[derive(Clone)]
pub struct FakeGitHub {
    state: Arc<GitHubState>,
}

impl FakeGitHub {
    pub fn new(journal: Journal) -> Self {
        Self::build(Some("octocat".to_string()), None, journal)
    }

    pub fn without_login(journal: Journal) -> Self {
        Self::build(None, None, journal)
    }

    pub fn failing_on(key: &str, journal: Journal) -> Self {
        Self::build(Some("octocat".to_string()), Some(key.to_string()), journal)
    }

    fn build(login: Option<String>, fail_on: Option<String>, journal: Journal) -> Self {
        Self {
            state: Arc::new(GitHubState {
                login,
                organizations: vec![
                    Organization {
                        login: "acme".to_string(),
                    },
                    Organization {
                        login: "widgets".to_string(),
                    },
                ],
                repositories: vec![
                    Repository {
                        owner: "acme".to_string(),
                        name: "website".to_string(),
                    },
                    Repository {
                        owner: "acme".to_string(),
                        name: "tracker".to_string(),
                    },
                ],
                labels: vec![
                    Label {
                        name: "bug".to_string(),
                    },
                    Label {
                        name: "jira".to_string(),
                    },
                ],
                fail_on,
                created: Mutex::new(Vec::new()),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
                journal,
            }),
        }
    }

    pub fn created(&self) -> Vec<(Repository, IssueRequest)> {
        self.state.created.lock().unwrap().clone()
    }

    pub fn created_keys(&self) -> Vec<String> {
        self.created()
            .into_iter()
            .map(|(_, request)| request.source_key)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn authenticated_login(&self) -> Result<Option<String>, GitHubError> {
        Ok(self.state.login.clone())
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, GitHubError> {
        Ok(self.state.organizations.clone())
    }

    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, GitHubError> {
        Ok(self
            .state
            .repositories
            .iter()
            .filter(|repo| repo.owner == org)
            .cloned()
            .collect())
    }

    async fn list_labels(&self, _repository: &Repository) -> Result<Vec<Label>, GitHubError> {
        Ok(self.state.labels.clone())
    }

    async fn create_issue(
        &self,
        repository: &Repository,
        request: &IssueRequest,
    ) -> Result<CreatedIssue, GitHubError> {
        let now = self.state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Let the other creations of the page start before this one settles.
        tokio::task::yield_now().await;
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.state.fail_on.as_deref() == Some(request.source_key.as_str()) {
            self.state
                .journal
                .push(format!("failed {}", request.source_key));
            return Err(GitHubError::RateLimitExceeded { reset_at: 0 });
        }

        let mut created = self.state.created.lock().unwrap();
        created.push((repository.clone(), request.clone()));
        self.state
            .journal
            .push(format!("created {}", request.source_key));

        Ok(CreatedIssue {
            source_key: request.source_key.clone(),
            number: created.len() as u64,
            url: format!(
                "https://github.com/{}/issues/{}",
                repository.full_name(),
                created.len()
            ),
        })
    }
}

/// A scripted answer to the next prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    Select(&'static str),
    Confirm(bool),
}

/// Answers prompts from a script and records the questions asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, message: &str) -> Answer {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for '{message}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str) -> Result<String, PromptError> {
        match self.next(message) {
            Answer::Text(text) => Ok(text.to_string()),
            other => panic!("expected text for '{message}', got {other:?}"),
        }
    }

    fn secret(&self, message: &str) -> Result<String, PromptError> {
        self.input(message)
    }

    fn select<T>(&self, message: &str, choices: Vec<Choice<T>>) -> Result<T, PromptError> {
        match self.next(message) {
            Answer::Select(name) => choices
                .into_iter()
                .find(|choice| choice.name == name)
                .map(|choice| choice.value)
                .ok_or_else(|| PromptError::NoChoice {
                    message: message.to_string(),
                }),
            other => panic!("expected selection for '{message}', got {other:?}"),
        }
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(message) {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected confirmation for '{message}', got {other:?}"),
        }
    }
}

/// Hands out the fakes and records the credentials it was given.
pub struct FakeConnector {
    pub jira: FakeJira,
    pub github: FakeGitHub,
    pub jira_credentials: Mutex<Option<JiraCredentials>>,
    pub github_token: Mutex<Option<String>>,
}

impl FakeConnector {
    pub fn new(jira: FakeJira, github: FakeGitHub) -> Self {
        Self {
            jira,
            github,
            jira_credentials: Mutex::new(None),
            github_token: Mutex::new(None),
        }
    }
}

impl Connector for FakeConnector {
    type Jira = FakeJira;
    type GitHub = FakeGitHub;

    fn connect_jira(&self, credentials: JiraCredentials) -> Result<FakeJira, RunnerError> {
        *self.jira_credentials.lock().unwrap() = Some(credentials);
        Ok(self.jira.clone())
    }

    fn connect_github(&self, token: String) -> Result<FakeGitHub, RunnerError> {
        *self.github_token.lock().unwrap() = Some(token);
        Ok(self.github.clone())
    }
}
