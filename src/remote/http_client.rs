use super::*;

const API_VERSION: &str = "2022-11-28";

impl GitHubClient {
    pub(super) fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .get(self.url(path))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("{}: unauthorized (repo-token invalid or expired)", label);
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!(
                "{}: forbidden (token lacks read access to {} or rate limit exceeded)",
                label,
                self.repo
            );
        }
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("{}: not found in {}", label, self.repo);
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(super) fn repo_path(&self, rest: &str) -> String {
        format!("/repos/{}/{}{}", self.repo.owner, self.repo.repo, rest)
    }
}
