use anyhow::{Context, Result};

use crate::model::{FileChange, PullRequest, RepoRef};
use crate::sources::ChangeProvider;

mod http_client;
mod types;
use self::types::*;
mod commits;
mod pulls;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST client bound to one repository.
pub struct GitHubClient {
    api_url: String,
    repo: RepoRef,
    token: String,
    client: reqwest::blocking::Client,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: String, repo: RepoRef) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("changed-files")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            repo,
            token,
            client,
        })
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }
}

impl ChangeProvider for GitHubClient {
    fn list_pull_request_files(
        &self,
        pr: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<FileChange>> {
        self.pull_request_files_page(pr, page, per_page)
    }

    fn get_commit_files(&self, commit: &str) -> Result<Vec<FileChange>> {
        self.commit_files(commit)
    }

    fn get_pull_request(&self, pr: u64) -> Result<PullRequest> {
        self.pull_request(pr)
    }
}
