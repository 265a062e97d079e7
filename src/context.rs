//! Run context: which event triggered the run and what its payload says.
//!
//! Loaded once by the CLI runtime and handed to the dispatcher; nothing below
//! the dispatcher reads the environment.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{CommitRef, RepoRef};

#[derive(Clone, Debug)]
pub struct RunContext {
    pub event_name: String,
    pub repo: RepoRef,
    pub payload: EventPayload,
}

/// The parts of a webhook payload this action reads. Everything else is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,

    #[serde(default)]
    pub commits: Option<Vec<CommitRef>>,

    #[serde(default)]
    pub merge_group: Option<MergeGroupPayload>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MergeGroupPayload {
    #[serde(default)]
    pub head_ref: Option<String>,
}

impl RunContext {
    /// Reads `GITHUB_EVENT_NAME`, `GITHUB_REPOSITORY` and the payload file at
    /// `GITHUB_EVENT_PATH`.
    pub fn from_env() -> Result<Self> {
        let event_name = std::env::var("GITHUB_EVENT_NAME").unwrap_or_default();
        let repository = std::env::var("GITHUB_REPOSITORY").unwrap_or_default();
        let repo: RepoRef = repository.parse()?;

        let payload = match std::env::var_os("GITHUB_EVENT_PATH") {
            Some(path) if Path::new(&path).exists() => EventPayload::load(Path::new(&path))?,
            Some(path) if !path.is_empty() => {
                tracing::warn!(path = %Path::new(&path).display(), "event payload file does not exist");
                EventPayload::default()
            }
            _ => EventPayload::default(),
        };

        Ok(Self {
            event_name,
            repo,
            payload,
        })
    }
}

impl EventPayload {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read event payload {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse event payload {}", path.display()))
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
