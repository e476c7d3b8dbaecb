//! Configuration for the GitHub API connection.
use secrecy::{ExposeSecret, SecretString};

/// Environment variable consulted for the API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Host marker that precedes the `owner/repo` part of a remote URL.
pub const GITHUB_HOST_MARKER: &str = "github.com/";
/// Description used whenever a real one cannot be obtained.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available.";

/// Connection settings for the GitHub API, built once per run and passed
/// to the client explicitly.
#[derive(Debug, Clone, Default)]
pub struct GithubConfig {
    /// Personal access token. `None` means unauthenticated requests.
    pub token: Option<SecretString>,
    /// Alternate API base url, e.g. for GitHub Enterprise.
    pub api_url: Option<String>,
}

impl GithubConfig {
    /// Build a config from an optional raw token, treating blank values as
    /// absent.
    pub fn new(token: Option<String>, api_url: Option<String>) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(SecretString::from);

        let api_url = api_url.filter(|u| !u.trim().is_empty());

        Self { token, api_url }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }
}
