//! Git remote url resolution for plugin checkouts.
//!
//! Each installed plugin is expected to be a git checkout with an `origin`
//! remote. Two resolvers are provided:
//!
//! - [`GitCliResolver`] shells out to `git config --get remote.origin.url`
//!   inside the plugin directory (the default)
//! - [`Libgit2Resolver`] reads the same remote in-process through `git2`
//!
//! A plugin whose remote cannot be read resolves to `None` and is left out
//! of the catalog.
use async_trait::async_trait;
use clap::ValueEnum;
use log::*;
#[cfg(test)]
use mockall::automock;
use std::path::Path;
use tokio::process::Command;

/// Name of the remote whose fetch url identifies a plugin.
pub const ORIGIN_REMOTE: &str = "origin";
/// Version control suffix stripped from remote urls.
pub const GIT_SUFFIX: &str = ".git";

/// Reads the raw remote url of a plugin checkout.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteResolver: Send + Sync {
    /// Returns the trimmed `origin` fetch url, or `None` when the directory
    /// is not a checkout or has no such remote.
    async fn remote_url(&self, plugin_path: &Path) -> Option<String>;
}

/// Selects which [`RemoteResolver`] implementation a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// Invoke the `git` executable.
    #[default]
    Git,
    /// Read the repository with libgit2.
    Libgit2,
}

impl ResolverKind {
    pub fn build(self) -> Box<dyn RemoteResolver> {
        match self {
            ResolverKind::Git => Box::new(GitCliResolver),
            ResolverKind::Libgit2 => Box::new(Libgit2Resolver),
        }
    }
}

/// Resolves remotes by running the `git` executable.
#[derive(Debug, Default)]
pub struct GitCliResolver;

#[async_trait]
impl RemoteResolver for GitCliResolver {
    async fn remote_url(&self, plugin_path: &Path) -> Option<String> {
        let key = format!("remote.{ORIGIN_REMOTE}.url");

        let output = Command::new("git")
            .args(["config", "--get", key.as_str()])
            .current_dir(plugin_path)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                error!(
                    "Error fetching GitHub URL for {}: {err}",
                    plugin_path.display()
                );
                return None;
            }
        };

        if !output.status.success() {
            error!("Error fetching GitHub URL for {}", plugin_path.display());
            debug!(
                "git exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        non_empty(String::from_utf8_lossy(&output.stdout).trim(), plugin_path)
    }
}

/// Resolves remotes in-process with libgit2.
#[derive(Debug, Default)]
pub struct Libgit2Resolver;

#[async_trait]
impl RemoteResolver for Libgit2Resolver {
    async fn remote_url(&self, plugin_path: &Path) -> Option<String> {
        let path = plugin_path.to_path_buf();

        let url = tokio::task::spawn_blocking(move || {
            git2::Repository::open(&path).and_then(|repo| {
                let remote = repo.find_remote(ORIGIN_REMOTE)?;
                Ok(remote.url().map(|u| u.to_string()))
            })
        })
        .await;

        let url = match url {
            Ok(url) => url,
            Err(err) => {
                error!(
                    "Error fetching GitHub URL for {}: {err}",
                    plugin_path.display()
                );
                return None;
            }
        };

        match url {
            Ok(Some(url)) => non_empty(url.trim(), plugin_path),
            Ok(None) => {
                error!(
                    "Error fetching GitHub URL for {}: remote url is not valid utf-8",
                    plugin_path.display()
                );
                None
            }
            Err(err) => {
                error!(
                    "Error fetching GitHub URL for {}: {}",
                    plugin_path.display(),
                    err.message()
                );
                None
            }
        }
    }
}

fn non_empty(url: &str, plugin_path: &Path) -> Option<String> {
    if url.is_empty() {
        error!(
            "Error fetching GitHub URL for {}: remote url is empty",
            plugin_path.display()
        );
        return None;
    }

    Some(url.to_string())
}

/// Removes every occurrence of `.git` from a remote url.
///
/// This is a plain substring removal, not a suffix strip: a path that
/// legitimately contains `.git` elsewhere is altered too.
pub fn normalize_remote_url(url: &str) -> String {
    url.replace(GIT_SUFFIX, "")
}

/// Resolve and normalize the remote url of a plugin directory.
pub async fn resolve_remote_url(
    resolver: &dyn RemoteResolver,
    plugin_path: &Path,
) -> Option<String> {
    let url = resolver.remote_url(plugin_path).await?;
    let normalized = normalize_remote_url(&url);
    debug!("resolved {} -> {normalized}", plugin_path.display());
    Some(normalized)
}
