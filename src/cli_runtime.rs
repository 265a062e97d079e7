use anyhow::Result;
use clap::Parser;

use changed_files::context::RunContext;
use changed_files::dispatch::{Dispatcher, Overrides};
use changed_files::encoding::ResultEncoding;
use changed_files::error::ConfigError;
use changed_files::filter::PatternFilter;
use changed_files::outputs::OutputSink;
use changed_files::remote::{DEFAULT_API_URL, GitHubClient};
use changed_files::sources::PaginationMode;

/// Every flag falls back to the matching `INPUT_*` variable the runner sets
/// for action inputs.
#[derive(Parser, Debug)]
#[command(name = "changed-files")]
#[command(
    about = "List files created, updated and deleted by a pull request or push",
    long_about = None
)]
pub(crate) struct Cli {
    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    repo_token: Option<String>,

    /// Regular expression a path must match to be reported (default: all paths)
    #[arg(long, env = "INPUT_PATTERN")]
    pattern: Option<String>,

    /// Pull request number (default: taken from the event payload)
    #[arg(long, env = "INPUT_PR-NUMBER")]
    pr_number: Option<String>,

    /// Output encoding: `string` (newline separated) or `json`
    #[arg(long, env = "INPUT_RESULT-ENCODING")]
    result_encoding: Option<String>,

    /// Treat the run as this event (`push` or `pull_request`)
    #[arg(long, env = "INPUT_EVENT")]
    event: Option<String>,

    /// Pull request paging: `auto` (until a short page) or `count` (use the PR's file count)
    #[arg(long, env = "INPUT_PAGINATION")]
    pagination: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

/// Configuration validated before any API call.
struct Settings {
    token: String,
    filter: PatternFilter,
    encoding: ResultEncoding,
    pagination: PaginationMode,
    overrides: Overrides,
}

impl Cli {
    fn settings(&self) -> Result<Settings, ConfigError> {
        let encoding = non_empty(&self.result_encoding)
            .unwrap_or("string")
            .parse::<ResultEncoding>()?;
        let token = non_empty(&self.repo_token)
            .ok_or(ConfigError::MissingToken)?
            .to_string();
        let filter = PatternFilter::new(non_empty(&self.pattern))?;
        let pagination = non_empty(&self.pagination)
            .unwrap_or("auto")
            .parse::<PaginationMode>()?;

        Ok(Settings {
            token,
            filter,
            encoding,
            pagination,
            overrides: Overrides {
                event: non_empty(&self.event).map(str::to_string),
                pr_number: non_empty(&self.pr_number).map(str::to_string),
            },
        })
    }
}

// The runner exports declared-but-unset inputs as empty strings.
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    let context = RunContext::from_env()?;
    tracing::debug!(
        event = %context.event_name,
        repo = %context.repo,
        pattern = settings.filter.as_str(),
        "resolved run context"
    );

    let client = GitHubClient::new(&cli.api_url, settings.token, context.repo.clone())?;
    let dispatcher = Dispatcher::new(context, settings.overrides);
    let changes = dispatcher.run(&client, settings.filter, settings.pagination)?;

    tracing::info!(
        created = changes.created().len(),
        updated = changes.updated().len(),
        deleted = changes.deleted().len(),
        "classified changed files"
    );

    OutputSink::from_env().publish(&changes, settings.encoding)?;
    Ok(())
}
