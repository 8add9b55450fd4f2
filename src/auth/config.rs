use std::env;
use std::fmt;

use crate::error::GitHubError;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub API credential
#[derive(Clone)]
pub struct TokenConfig {
    pub token: String,
}

impl TokenConfig {
    /// Load the token from the environment (after an optional `.env` file)
    pub fn from_env() -> Result<Self, GitHubError> {
        let _ = dotenvy::dotenv();
        Self::from_var(env::var(TOKEN_ENV).ok())
    }

    fn from_var(value: Option<String>) -> Result<Self, GitHubError> {
        match value {
            Some(token) if !token.trim().is_empty() => Ok(Self { token }),
            _ => Err(GitHubError::MissingToken),
        }
    }
}

// keep the token out of logs
impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig").field("token", &"***").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(matches!(TokenConfig::from_var(None), Err(GitHubError::MissingToken)));
    }

    #[test]
    fn test_blank_token_is_an_error() {
        assert!(TokenConfig::from_var(Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let config = TokenConfig::from_var(Some("ghp_secret".to_string())).unwrap();
        assert_eq!(config.token, "ghp_secret");
        assert!(!format!("{:?}", config).contains("ghp_secret"));
    }
}
