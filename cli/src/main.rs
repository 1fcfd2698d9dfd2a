//! CLI for the Jira migrator.
//!
//! Asks for Jira and GitHub credentials and selections, then copies the
//! chosen Jira issues into a GitHub repository as labeled issues.

use clap::Parser;
use jira_migrator::{
    LiveConnector, RunSummary, Runner, RunnerConfig, RunnerError, TerminalPrompter,
    DEFAULT_PAGE_SIZE,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Jira Migrator - Copy Jira project issues into a GitHub repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Issues fetched from Jira, and created on GitHub concurrently, per page.
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    page_size: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Both ring and aws-lc-rs may be linked in; pick one for rustls.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Migration failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(usize::from(args.page_size));
    let runner = Runner::new(config, TerminalPrompter::new(), LiveConnector);
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    if !summary.confirmed {
        return;
    }

    println!("\nSummary:");
    println!("  Issues reported by Jira: {}", summary.issues_reported);
    println!("  Pages fetched: {}", summary.pages_fetched);
    println!("  Issues fetched: {}", summary.issues_fetched);
    println!("  Issues created: {}", summary.issues_created());
}
