//! Implements the DescriptionSource trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};

use crate::{
    error::FetchError,
    forge::{config::GithubConfig, traits::DescriptionSource, types::RepoId},
    result::Result,
};

/// GitHub description source using Octocrab for repository lookups.
pub struct Github {
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        // lookups are sent exactly once
        let mut builder =
            Octocrab::builder().add_retry_config(RetryConfig::None);

        match &config.token {
            Some(token) if config.is_authenticated() => {
                builder = builder.personal_token(token.clone());
            }
            _ => warn!(
                "no github token configured: using unauthenticated requests with stricter rate limits"
            ),
        }

        if let Some(api_url) = &config.api_url {
            debug!("using github api url: {api_url}");
            builder = builder.base_uri(api_url.as_str())?;
        }

        let instance = builder.build()?;

        Ok(Self { instance })
    }
}

#[async_trait]
impl DescriptionSource for Github {
    async fn fetch_description(
        &self,
        repo: &RepoId,
    ) -> std::result::Result<Option<String>, FetchError> {
        let result = self.instance.repos(&repo.owner, &repo.repo).get().await;

        match result {
            Ok(repository) => Ok(repository.description),
            Err(err) => {
                let err = FetchError::from(err);
                debug!("github lookup for {repo} failed: {err:?}");
                Err(err)
            }
        }
    }
}
