use super::*;

impl GitHubClient {
    pub fn commit_files(&self, commit: &str) -> Result<Vec<FileChange>> {
        let resp = self
            .get(&self.repo_path(&format!("/commits/{}", commit)))
            .send()
            .context("get commit")?;
        let c: CommitResponse = self
            .ensure_ok(resp, &format!("commit {}", commit))?
            .json()
            .context("parse commit")?;
        if c.files.is_none() {
            tracing::debug!(commit = %c.sha, "commit response carries no file list");
        }
        Ok(c.files.unwrap_or_default())
    }
}
