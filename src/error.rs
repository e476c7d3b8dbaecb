//! Typed failures for repository description lookups.

use reqwest::StatusCode;
use thiserror::Error;

/// Reasons a repository description could not be fetched.
///
/// Every variant is recoverable: the caller logs it and substitutes the
/// placeholder description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid repository identifier: {0}")]
    InvalidIdentifier(String),

    #[error("API authentication failed: {0}")]
    BadCredentials(String),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network request failed: {0}")]
    Network(String),
}

impl FetchError {
    /// Classify a GitHub API error response by status code and message.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();

        match status {
            StatusCode::UNAUTHORIZED => Self::BadCredentials(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(message),
            StatusCode::FORBIDDEN
                if message.to_lowercase().contains("rate limit") =>
            {
                Self::RateLimited(message)
            }
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

// GitHub returns structured errors for non-2xx responses, anything else is
// treated as a transport failure
impl From<octocrab::Error> for FetchError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                Self::from_status(source.status_code, source.message.clone())
            }
            other => Self::Network(other.to_string()),
        }
    }
}
