//! Catalog generation command.
//!
//! Drives the whole pipeline for one run:
//!
//! 1. **Scan**: list plugin directories under the configured root
//! 2. **Collect**: resolve each plugin's remote and fetch its description
//! 3. **Render**: build the markdown document
//! 4. **Write**: overwrite the output file and report its location
//!
//! Only scanning and writing can fail the run. Per-plugin problems are
//! logged and either skip the plugin or degrade its description.
use color_eyre::eyre::WrapErr;
use log::*;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{
    catalog::{collect_records, render_document},
    config::CatalogConfig,
    forge::{github::Github, traits::DescriptionSource},
    resolver::RemoteResolver,
    result::Result,
    scanner::scan_plugins,
};

/// Build the real resolver and GitHub client from `config` and run.
pub async fn run(config: &CatalogConfig) -> Result<PathBuf> {
    let resolver = config.resolver.build();
    let github = Github::new(&config.github)?;

    execute(config, resolver.as_ref(), &github).await
}

/// Generate the catalog with the given resolver and description source.
/// Returns the path the document was written to.
pub async fn execute(
    config: &CatalogConfig,
    resolver: &dyn RemoteResolver,
    source: &dyn DescriptionSource,
) -> Result<PathBuf> {
    let plugins = scan_plugins(&config.plugins_dir)?;

    let records =
        collect_records(plugins, resolver, source, config.concurrency).await;

    let document = render_document(&config.title, &records);

    write_document(&config.output, &document).await?;

    info!(
        "Markdown documentation generated at: {}",
        config.output.display()
    );

    Ok(config.output.clone())
}

async fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).await.wrap_err_with(|| {
            format!("failed to create directory: {}", parent.display())
        })?;
    }

    debug!("writing {} bytes to: {}", content.len(), path.display());

    fs::write(path, content)
        .await
        .wrap_err_with(|| format!("failed to write: {}", path.display()))
}
