use super::*;

impl GitHubClient {
    pub fn pull_request_files_page(
        &self,
        pr: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<FileChange>> {
        let resp = self
            .get(&self.repo_path(&format!("/pulls/{}/files", pr)))
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .context("list pull request files")?;
        let files: Vec<FileChange> = self
            .ensure_ok(resp, &format!("pull request #{}", pr))?
            .json()
            .context("parse pull request files")?;
        Ok(files)
    }

    pub fn pull_request(&self, pr: u64) -> Result<PullRequest> {
        let resp = self
            .get(&self.repo_path(&format!("/pulls/{}", pr)))
            .send()
            .context("get pull request")?;
        let pull: PullRequest = self
            .ensure_ok(resp, &format!("pull request #{}", pr))?
            .json()
            .context("parse pull request")?;
        Ok(pull)
    }
}
