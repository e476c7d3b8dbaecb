//! Discovery of installed plugin directories.
use color_eyre::eyre::WrapErr;
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::result::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One installed plugin: a directory directly under the plugin root.
pub struct PluginDir {
    /// Directory basename.
    pub name: String,
    /// Full path to the plugin directory.
    pub path: PathBuf,
}

/// List the plugin directories directly under `base`, sorted by name.
///
/// Entries that are not directories (after following symlinks) are skipped.
/// A missing or unreadable `base` is an error.
pub fn scan_plugins(base: &Path) -> Result<Vec<PluginDir>> {
    let entries = fs::read_dir(base).wrap_err_with(|| {
        format!("failed to read plugin directory: {}", base.display())
    })?;

    let mut plugins = vec![];

    for entry in entries {
        let entry = entry.wrap_err_with(|| {
            format!("failed to read entry in: {}", base.display())
        })?;

        let path = entry.path();

        if !path.is_dir() {
            debug!("skipping non-directory entry: {}", path.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        plugins.push(PluginDir { name, path });
    }

    plugins.sort_by(|a, b| a.name.cmp(&b.name));

    info!("found {} plugins in {}", plugins.len(), base.display());

    Ok(plugins)
}
