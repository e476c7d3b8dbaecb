//! Traits related to description lookups
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{error::FetchError, forge::types::RepoId};

/// Source of short repository descriptions.
///
/// Implemented by [`crate::forge::github::Github`] for the real API and
/// mocked in tests to simulate credential, not-found and rate-limit
/// failures without network access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Look up the description of a repository.
    ///
    /// * `Ok(Some(_))` - the repository has a description
    /// * `Ok(None)` - the repository exists but has no description
    /// * `Err(_)` - the lookup failed
    async fn fetch_description(
        &self,
        repo: &RepoId,
    ) -> Result<Option<String>, FetchError>;
}
