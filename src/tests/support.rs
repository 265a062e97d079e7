//! In-memory provider used by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use crate::model::{FileChange, PullRequest};
use crate::sources::ChangeProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    ListFiles { pr: u64, page: u32, per_page: u32 },
    GetCommit(String),
    GetPullRequest(u64),
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    pub(crate) pr_files: HashMap<u64, Vec<FileChange>>,
    pub(crate) changed_files_override: Option<u64>,
    pub(crate) commits: HashMap<String, Vec<FileChange>>,
    pub(crate) delays: HashMap<String, Duration>,
    pub(crate) failing: HashSet<String>,
    pub(crate) calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub(crate) fn with_pull_request(mut self, pr: u64, files: Vec<FileChange>) -> Self {
        self.pr_files.insert(pr, files);
        self
    }

    pub(crate) fn with_commit(mut self, id: &str, files: Vec<FileChange>) -> Self {
        self.commits.insert(id.to_string(), files);
        self
    }

    pub(crate) fn with_delay(mut self, id: &str, delay: Duration) -> Self {
        self.delays.insert(id.to_string(), delay);
        self
    }

    pub(crate) fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn page_fetches(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::ListFiles { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl ChangeProvider for FakeProvider {
    fn list_pull_request_files(
        &self,
        pr: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<FileChange>> {
        self.record(Call::ListFiles { pr, page, per_page });
        let files = self
            .pr_files
            .get(&pr)
            .ok_or_else(|| anyhow::anyhow!("pull request #{} not found", pr))?;
        let start = (page as usize - 1) * per_page as usize;
        Ok(files
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    fn get_commit_files(&self, commit: &str) -> Result<Vec<FileChange>> {
        self.record(Call::GetCommit(commit.to_string()));
        if let Some(delay) = self.delays.get(commit) {
            std::thread::sleep(*delay);
        }
        if self.failing.contains(commit) {
            anyhow::bail!("commit {} not found", commit);
        }
        Ok(self.commits.get(commit).cloned().unwrap_or_default())
    }

    fn get_pull_request(&self, pr: u64) -> Result<PullRequest> {
        self.record(Call::GetPullRequest(pr));
        let files = self
            .pr_files
            .get(&pr)
            .ok_or_else(|| anyhow::anyhow!("pull request #{} not found", pr))?;
        Ok(PullRequest {
            number: pr,
            changed_files: self.changed_files_override.unwrap_or(files.len() as u64),
        })
    }
}

pub(crate) fn modified(f: &str) -> FileChange {
    FileChange::Modified {
        filename: f.to_string(),
    }
}

pub(crate) fn added(f: &str) -> FileChange {
    FileChange::Added {
        filename: f.to_string(),
    }
}

pub(crate) fn numbered_files(n: usize) -> Vec<FileChange> {
    (0..n).map(|i| modified(&format!("src/file_{:04}.rs", i))).collect()
}
