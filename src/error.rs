//! Typed failure categories that must be reported distinctly from provider errors.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'result-encoding' must be either 'string' or 'json' (got '{0}')")]
    InvalidEncoding(String),

    #[error("input required and not supplied: repo-token")]
    MissingToken,

    #[error("'pattern' is not a valid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("'pr-number' must be a positive integer (got '{0}')")]
    InvalidPrNumber(String),

    #[error("'pagination' must be either 'auto' or 'count' (got '{0}')")]
    InvalidPagination(String),

    #[error("GITHUB_REPOSITORY must look like 'owner/repo' (got '{0}')")]
    InvalidRepository(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("could not get pull request from context, exiting")]
    MissingPullRequest,

    #[error("could not get push from context, exiting")]
    MissingPush,
}
