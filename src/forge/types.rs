//! Repository identifiers and description lookup with placeholder fallback.
use log::*;
use std::fmt;

use crate::{
    error::FetchError,
    forge::{
        config::{GITHUB_HOST_MARKER, PLACEHOLDER_DESCRIPTION},
        traits::DescriptionSource,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Owner and repository name of a hosted repository.
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    /// Split an `owner/repo` identifier on its first slash.
    pub fn parse(identifier: &str) -> Result<Self, FetchError> {
        match identifier.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(FetchError::InvalidIdentifier(identifier.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Extract the `owner/repo` part of a remote url: everything after the last
/// `github.com/` marker. Urls without the marker come back unchanged and
/// fail the lookup later.
pub fn repo_identifier(url: &str) -> &str {
    url.rsplit(GITHUB_HOST_MARKER).next().unwrap_or(url)
}

/// Fetch the description for a normalized remote url, degrading every
/// failure to [`PLACEHOLDER_DESCRIPTION`].
pub async fn describe(source: &dyn DescriptionSource, url: &str) -> String {
    let identifier = repo_identifier(url);

    let result = match RepoId::parse(identifier) {
        Ok(repo) => {
            debug!("fetching description for {repo}");
            source.fetch_description(&repo).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(Some(description)) if !description.trim().is_empty() => {
            description
        }
        Ok(_) => {
            debug!("no description set for {identifier}");
            PLACEHOLDER_DESCRIPTION.to_string()
        }
        Err(FetchError::BadCredentials(msg)) => {
            error!("Invalid GitHub token. Please check your credentials.");
            debug!("authentication failure for {identifier}: {msg}");
            PLACEHOLDER_DESCRIPTION.to_string()
        }
        Err(err) => {
            error!("Error fetching description for {identifier}: {err}");
            PLACEHOLDER_DESCRIPTION.to_string()
        }
    }
}
