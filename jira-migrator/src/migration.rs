//! The paged copy of Jira issues into GitHub.
//!
//! Issues are read page by page with the query captured during selection.
//! The creation requests of one page run concurrently, bounded by the page
//! size, and are joined before the next page is fetched. The first failed
//! creation aborts the run.

use crate::github::{GitHubApi, GitHubError, Repository};
use crate::issues::{build_issue_request, CreatedIssue, IssueRequest};
use crate::jira::{JiraApi, PageRequest};
use crate::query::IssueQuery;
use crate::runner::RunnerError;
use crate::summary::RunSummary;
use crate::templates::TemplateRenderer;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use tracing::{debug, info, info_span, Instrument};

/// Number of issues fetched, and created concurrently, per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Everything the copy needs once the user has made their selections.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    /// Query selecting the issues.
    pub query: IssueQuery,

    /// Issue total captured before the copy; never refreshed.
    pub total: u64,

    /// Jira host used for back-reference links.
    pub jira_host: String,

    /// Repository receiving the issues.
    pub repository: Repository,

    /// Label applied to every created issue.
    pub label: String,
}

/// Start offsets of the pages to fetch.
///
/// Offsets run from zero while they are less than *or equal to* `total`, so
/// when `total` is a multiple of `page_size` a last, empty page is fetched.
pub fn page_starts(total: u64, page_size: usize) -> impl Iterator<Item = u64> {
    (0..=total).step_by(page_size.max(1))
}

/// Copies every issue matched by the plan's query into GitHub.
///
/// `progress` must start at zero; it is advanced by the number of issues
/// each page actually returned and finished once the last page is done.
///
/// # Errors
///
/// Returns the first Jira, template or GitHub error encountered. Issues
/// already created stay created.
pub async fn migrate<J, G>(
    jira: &J,
    github: &G,
    plan: &MigrationPlan,
    renderer: &TemplateRenderer,
    page_size: usize,
    progress: &ProgressBar,
) -> Result<RunSummary, RunnerError>
where
    J: JiraApi,
    G: GitHubApi,
{
    let page_size = page_size.max(1);
    let mut summary = RunSummary::confirmed(plan.total);

    info!(
        total = plan.total,
        page_size,
        repo = %plan.repository.full_name(),
        label = %plan.label,
        "Starting migration"
    );

    for start_at in page_starts(plan.total, page_size) {
        let span = info_span!("page", start_at);

        let (fetched, created) = async {
            let page = jira
                .search_issues(
                    plan.query.as_str(),
                    Some(PageRequest {
                        start_at,
                        max_results: page_size as u64,
                    }),
                )
                .await?;
            debug!(returned = page.issues.len(), "Fetched page");

            let requests = page
                .issues
                .iter()
                .map(|issue| build_issue_request(issue, &plan.jira_host, &plan.label, renderer))
                .collect::<Result<Vec<_>, _>>()?;

            let created = create_page(github, &plan.repository, &requests, page_size).await?;
            Ok::<_, RunnerError>((page.issues.len() as u64, created))
        }
        .instrument(span)
        .await?;

        progress.inc(fetched);
        summary.record_page(fetched, created);
    }

    progress.finish();
    info!(
        pages = summary.pages_fetched,
        created = summary.issues_created(),
        "Migration complete"
    );
    Ok(summary)
}

/// Creates the issues of one page concurrently and waits for all of them.
///
/// Creations already sent are not cancelled by a failing sibling; the first
/// failure is reported once the whole page has settled.
async fn create_page<G: GitHubApi>(
    github: &G,
    repository: &Repository,
    requests: &[IssueRequest],
    concurrency: usize,
) -> Result<Vec<CreatedIssue>, RunnerError> {
    let results: Vec<Result<CreatedIssue, GitHubError>> = stream::iter(requests)
        .map(|request| github.create_issue(repository, request))
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let created = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(created)
}
