//! Ingestion strategies that feed provider records into a [`ChangeSet`].
//!
//! [`ChangeSet`]: crate::changes::ChangeSet

use std::str::FromStr;

use anyhow::Result;

use crate::error::ConfigError;
use crate::model::{FileChange, PullRequest};

mod pull_request;
mod push;

pub use self::pull_request::{PAGE_SIZE, PullRequestPages, changed_files_for_pull_request};
pub use self::push::changed_files_for_push;

/// The upstream calls the adapters need. Repository identity is bound into
/// the implementation.
///
/// `Sync` because push fetches run on scoped threads sharing one provider.
pub trait ChangeProvider: Sync {
    fn list_pull_request_files(&self, pr: u64, page: u32, per_page: u32)
    -> Result<Vec<FileChange>>;

    fn get_commit_files(&self, commit: &str) -> Result<Vec<FileChange>>;

    fn get_pull_request(&self, pr: u64) -> Result<PullRequest>;
}

/// When to stop paging through a pull request's files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pagination {
    /// Stop at the first short or empty page.
    #[default]
    UntilExhausted,
    /// Also stop once enough pages for this many files have been fetched.
    ExpectedCount(u64),
}

/// The `pagination` input: whether to ask the provider for the file count first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationMode {
    #[default]
    Auto,
    Count,
}

impl FromStr for PaginationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "auto" => Ok(PaginationMode::Auto),
            "count" => Ok(PaginationMode::Count),
            other => Err(ConfigError::InvalidPagination(other.to_string())),
        }
    }
}

impl PaginationMode {
    pub fn resolve<P: ChangeProvider + ?Sized>(self, provider: &P, pr: u64) -> Result<Pagination> {
        match self {
            PaginationMode::Auto => Ok(Pagination::UntilExhausted),
            PaginationMode::Count => {
                let pull = provider.get_pull_request(pr)?;
                tracing::debug!(pr, changed_files = pull.changed_files, "pull request file count");
                Ok(Pagination::ExpectedCount(pull.changed_files))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/sources_tests.rs"]
mod tests;
