use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::changes::ChangeSet;
use crate::context::RunContext;
use crate::error::{ConfigError, ContextError};
use crate::filter::PatternFilter;
use crate::model::CommitRef;
use crate::sources::{
    ChangeProvider, PaginationMode, changed_files_for_pull_request, changed_files_for_push,
};

// Merge queue branches look like `gh-readonly-queue/main/pr-123-<sha>`.
static MERGE_QUEUE_PR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pr-(\d+)-").expect("merge queue pattern compiles"));

/// Inputs that take precedence over the run context.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub event: Option<String>,
    pub pr_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    PullRequest(u64),
    Push(Vec<CommitRef>),
    /// Neither a push nor a pull request; classification yields nothing.
    Unsupported(String),
}

pub struct Dispatcher {
    context: RunContext,
    overrides: Overrides,
}

impl Dispatcher {
    pub fn new(context: RunContext, overrides: Overrides) -> Self {
        Self { context, overrides }
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn event_name(&self) -> &str {
        match self.overrides.event.as_deref() {
            Some(event) if !event.is_empty() => event,
            _ => &self.context.event_name,
        }
    }

    pub fn resolve_mode(&self) -> Result<Mode> {
        match self.event_name() {
            "push" => {
                let commits = self
                    .context
                    .payload
                    .commits
                    .clone()
                    .ok_or(ContextError::MissingPush)?;
                Ok(Mode::Push(commits))
            }
            "pull_request" => {
                let pr = self
                    .pull_request_number()?
                    .ok_or(ContextError::MissingPullRequest)?;
                Ok(Mode::PullRequest(pr))
            }
            other => Ok(Mode::Unsupported(other.to_string())),
        }
    }

    /// Explicit input first, then the pull request payload, then the merge
    /// queue head ref.
    pub fn pull_request_number(&self) -> Result<Option<u64>, ConfigError> {
        if let Some(raw) = self.overrides.pr_number.as_deref() {
            if !raw.is_empty() {
                return match raw.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Ok(Some(n)),
                    _ => Err(ConfigError::InvalidPrNumber(raw.to_string())),
                };
            }
        }

        if let Some(pr) = &self.context.payload.pull_request {
            return Ok(Some(pr.number));
        }

        let head_ref = self
            .context
            .payload
            .merge_group
            .as_ref()
            .and_then(|m| m.head_ref.as_deref());
        Ok(head_ref.and_then(pr_number_from_merge_queue_ref))
    }

    pub fn run<P: ChangeProvider + ?Sized>(
        &self,
        provider: &P,
        filter: PatternFilter,
        pagination: PaginationMode,
    ) -> Result<ChangeSet> {
        match self.resolve_mode()? {
            Mode::Push(commits) => {
                tracing::debug!(commits = commits.len(), "classifying push");
                changed_files_for_push(provider, filter, &commits)
            }
            Mode::PullRequest(pr) => {
                tracing::debug!(pr, "classifying pull request");
                let pagination = pagination.resolve(provider, pr)?;
                changed_files_for_pull_request(provider, filter, pr, pagination)
            }
            Mode::Unsupported(event) => {
                tracing::warn!(event = %event, "event is neither push nor pull_request; reporting no changes");
                Ok(ChangeSet::new(PatternFilter::match_all()))
            }
        }
    }
}

pub fn pr_number_from_merge_queue_ref(head_ref: &str) -> Option<u64> {
    MERGE_QUEUE_PR
        .captures(head_ref)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
