//! Collection and markdown rendering of the plugin catalog.
use futures_util::{StreamExt, future, stream};
use log::*;

use crate::{
    forge::{traits::DescriptionSource, types::describe},
    resolver::{RemoteResolver, resolve_remote_url},
    scanner::PluginDir,
};

/// Title written above the catalog table.
pub const DEFAULT_TITLE: &str = "Neovim Plugins Catalog";

const TABLE_HEADER: &str = "| Plugin Name | Description | GitHub URL |\n";
const TABLE_SEPARATOR: &str = "|-------------|-------------|------------|\n";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the catalog.
pub struct PluginRecord {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Build the record for a single plugin, or `None` when its remote cannot
/// be resolved.
pub async fn extract_plugin_record(
    plugin: PluginDir,
    resolver: &dyn RemoteResolver,
    source: &dyn DescriptionSource,
) -> Option<PluginRecord> {
    debug!("processing plugin: {}", plugin.name);

    let url = resolve_remote_url(resolver, &plugin.path).await?;
    let description = describe(source, &url).await;

    Some(PluginRecord {
        name: plugin.name,
        description,
        url,
    })
}

/// Resolve and describe every plugin, keeping the input order.
///
/// Up to `concurrency` plugins are processed at once. Plugins without a
/// resolvable remote are dropped.
pub async fn collect_records(
    plugins: Vec<PluginDir>,
    resolver: &dyn RemoteResolver,
    source: &dyn DescriptionSource,
    concurrency: usize,
) -> Vec<PluginRecord> {
    let total = plugins.len();

    let records: Vec<PluginRecord> = stream::iter(plugins)
        .map(|plugin| extract_plugin_record(plugin, resolver, source))
        .buffered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await;

    info!("cataloged {} of {total} plugins", records.len());

    records
}

/// Render records as the three column markdown table.
pub fn render_table(records: &[PluginRecord]) -> String {
    let mut table = String::from(TABLE_HEADER);
    table.push_str(TABLE_SEPARATOR);

    for record in records {
        table.push_str(&format!(
            "| {} | {} | [Link]({}) |\n",
            record.name, record.description, record.url
        ));
    }

    table
}

/// Render the full document: an H1 title, a blank line, then the table.
pub fn render_document(title: &str, records: &[PluginRecord]) -> String {
    format!("# {title}\n\n{}", render_table(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FetchError,
        forge::{
            config::PLACEHOLDER_DESCRIPTION, traits::MockDescriptionSource,
        },
        resolver::{Libgit2Resolver, MockRemoteResolver},
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn plugin(name: &str) -> PluginDir {
        PluginDir {
            name: name.to_string(),
            path: PathBuf::from("/plugins").join(name),
        }
    }

    fn record(name: &str, description: &str, url: &str) -> PluginRecord {
        PluginRecord {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    #[test]
    fn test_render_table_exact_output() {
        let records = vec![record("a", "d1", "u1"), record("b", "d2", "u2")];

        let expected = "| Plugin Name | Description | GitHub URL |\n\
                        |-------------|-------------|------------|\n\
                        | a | d1 | [Link](u1) |\n\
                        | b | d2 | [Link](u2) |\n";

        assert_eq!(render_table(&records), expected);
    }

    #[test]
    fn test_render_table_is_idempotent() {
        let records = vec![record("a", "d1", "u1"), record("b", "d2", "u2")];
        assert_eq!(render_table(&records), render_table(&records));
    }

    #[test]
    fn test_render_empty_table_has_header_only() {
        assert_eq!(
            render_table(&[]),
            format!("{TABLE_HEADER}{TABLE_SEPARATOR}")
        );
    }

    #[test]
    fn test_render_document_prepends_title() {
        let doc = render_document(DEFAULT_TITLE, &[record("a", "X", "u")]);
        assert!(doc.starts_with("# Neovim Plugins Catalog\n\n| Plugin Name"));
        assert!(doc.ends_with("| a | X | [Link](u) |\n"));
    }

    #[test_log::test(tokio::test)]
    async fn test_collect_skips_plugins_without_remote() {
        let mut resolver = MockRemoteResolver::new();
        resolver
            .expect_remote_url()
            .withf(|path| path.ends_with("orphan"))
            .returning(|_| None);
        resolver
            .expect_remote_url()
            .withf(|path| path.ends_with("good"))
            .returning(|_| Some("https://github.com/foo/good.git".into()));

        let mut source = MockDescriptionSource::new();
        source
            .expect_fetch_description()
            .times(1)
            .returning(|_| Ok(Some("Good plugin".into())));

        let records = collect_records(
            vec![plugin("good"), plugin("orphan")],
            &resolver,
            &source,
            1,
        )
        .await;

        assert_eq!(
            records,
            vec![record(
                "good",
                "Good plugin",
                "https://github.com/foo/good"
            )]
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_collect_keeps_record_when_lookup_fails() {
        let mut resolver = MockRemoteResolver::new();
        resolver
            .expect_remote_url()
            .returning(|_| Some("https://github.com/foo/bar".into()));

        let mut source = MockDescriptionSource::new();
        source
            .expect_fetch_description()
            .returning(|_| Err(FetchError::NotFound("Not Found".into())));

        let records =
            collect_records(vec![plugin("bar")], &resolver, &source, 1).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, PLACEHOLDER_DESCRIPTION);
    }

    #[test_log::test(tokio::test)]
    async fn test_collect_isolates_failures_and_preserves_order() {
        let mut resolver = MockRemoteResolver::new();
        resolver.expect_remote_url().returning(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            Some(format!("https://github.com/owner/{name}.git"))
        });

        let mut source = MockDescriptionSource::new();
        source.expect_fetch_description().returning(|repo| {
            match repo.repo.as_str() {
                "b" => Err(FetchError::RateLimited("slow down".into())),
                other => Ok(Some(format!("desc {other}"))),
            }
        });

        let plugins = vec![plugin("a"), plugin("b"), plugin("c"), plugin("d")];

        let records = collect_records(plugins, &resolver, &source, 3).await;

        let names: Vec<&str> =
            records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
        assert_eq!(records[0].description, "desc a");
        assert_eq!(records[1].description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(records[2].description, "desc c");
        assert_eq!(records[3].url, "https://github.com/owner/d");
    }

    #[test_log::test(tokio::test)]
    async fn test_collect_with_checkout_resolver_runs_concurrently_in_order() {
        let tmp = TempDir::new().unwrap();
        let names = ["alpha", "bravo", "charlie", "delta", "echo"];
        let plugins: Vec<PluginDir> = names
            .iter()
            .map(|name| {
                let path = tmp.path().join(name);
                let repo = git2::Repository::init(&path).unwrap();
                let url = format!("https://github.com/o/{name}.git");
                repo.remote("origin", &url).unwrap();
                PluginDir {
                    name: name.to_string(),
                    path,
                }
            })
            .collect();

        let mut source = MockDescriptionSource::new();
        source
            .expect_fetch_description()
            .times(names.len())
            .returning(|repo| Ok(Some(format!("about {}", repo.repo))));

        let records =
            collect_records(plugins, &Libgit2Resolver, &source, 4).await;

        let got: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(got, names.to_vec());
        assert_eq!(records[2].url, "https://github.com/o/charlie");
        assert_eq!(records[2].description, "about charlie");
    }
}
