use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("GitHub API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl GitHubError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
