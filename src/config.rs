//! Run configuration for catalog generation.
use std::path::{Path, PathBuf};

use crate::{
    catalog::DEFAULT_TITLE, forge::config::GithubConfig,
    resolver::ResolverKind,
};

/// Default plugin install location, relative to the home directory.
pub const DEFAULT_PLUGINS_DIR: &str = "~/.local/share/nvim/lazy";
/// Default output document path.
pub const DEFAULT_OUTPUT_FILE: &str = "docs/nvim-plugin-catalog.md";
/// Default number of plugins processed at once.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Everything a single catalog run needs.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory whose subdirectories are the installed plugins.
    pub plugins_dir: PathBuf,
    /// Markdown file to overwrite with the catalog.
    pub output: PathBuf,
    /// H1 title of the document.
    pub title: String,
    /// Maximum number of plugins resolved and described at once.
    pub concurrency: usize,
    /// Remote url resolver implementation.
    pub resolver: ResolverKind,
    /// GitHub API connection settings.
    pub github: GithubConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            plugins_dir: expand_home(DEFAULT_PLUGINS_DIR, home_dir().as_deref()),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            title: DEFAULT_TITLE.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            resolver: ResolverKind::default(),
            github: GithubConfig::default(),
        }
    }
}

/// Current user's home directory, if one can be determined.
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Replace a leading `~` with `home`. Paths without one, or with no known
/// home, are returned unchanged.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
