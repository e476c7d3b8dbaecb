//! CLI argument parsing and run configuration.
use clap::Parser;
use std::env;

use crate::{
    catalog::DEFAULT_TITLE,
    config::{
        CatalogConfig, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE,
        DEFAULT_PLUGINS_DIR, expand_home, home_dir,
    },
    forge::config::{GITHUB_TOKEN_ENV, GithubConfig},
    resolver::ResolverKind,
};

/// Generates a markdown catalog of installed Neovim plugins
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_PLUGINS_DIR)]
    /// Directory containing one subdirectory per installed plugin.
    pub plugins_dir: String,

    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    /// Markdown file to write. Overwritten on every run.
    pub output: String,

    #[arg(long, default_value = DEFAULT_TITLE)]
    /// Title heading of the generated document.
    pub title: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = None)]
    /// Optional GitHub API url, e.g. for GitHub Enterprise.
    pub api_url: Option<String>,

    #[arg(long, value_enum, default_value_t = ResolverKind::Git)]
    /// How plugin remotes are read.
    pub resolver: ResolverKind,

    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    /// Number of plugins processed at once.
    pub concurrency: usize,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Build the run configuration, resolving `~` and the token fallback.
    pub fn catalog_config(&self) -> CatalogConfig {
        let home = home_dir();

        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var(GITHUB_TOKEN_ENV)
        {
            token = env_var_token;
        }

        CatalogConfig {
            plugins_dir: expand_home(&self.plugins_dir, home.as_deref()),
            output: expand_home(&self.output, home.as_deref()),
            title: self.title.clone(),
            concurrency: self.concurrency.max(1),
            resolver: self.resolver,
            github: GithubConfig::new(Some(token), self.api_url.clone()),
        }
    }
}
