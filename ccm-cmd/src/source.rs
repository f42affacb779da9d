//! Where the feed comes from: a saved body on disk or the live URL.

use anyhow::Context;
use ccm_feed::fetch::{build_client, fetch_feed};
use ccm_feed::{parse_feed, RawRecord};
use ccm_map::{Dataset, MapConfig};
use clap::Args;
use log::info;
use std::path::Path;

/// Feed options shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct FeedArgs {
    /// Read a saved feed body instead of fetching
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Feed URL (overrides the config file)
    #[arg(long)]
    pub feed_url: Option<String>,

    /// JSON config file
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

impl FeedArgs {
    /// Config file settings with command-line overrides applied.
    pub fn resolve_config(&self) -> anyhow::Result<MapConfig> {
        let mut config = match &self.config {
            Some(path) => MapConfig::load_from_file(Path::new(path))?,
            None => MapConfig::default(),
        };
        if let Some(url) = &self.feed_url {
            config.feed_url = url.clone();
        }
        Ok(config)
    }
}

/// Load the raw feed records for `args`.
pub async fn load_records(args: &FeedArgs, config: &MapConfig) -> anyhow::Result<Vec<RawRecord>> {
    match &args.input {
        Some(path) => read_records(Path::new(path)),
        None => {
            let client = build_client()?;
            let records = fetch_feed(&client, &config.feed_url)
                .await
                .with_context(|| format!("Failed to fetch feed from {}", config.feed_url))?;
            Ok(records)
        }
    }
}

/// Decode a feed body saved to disk.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<RawRecord>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed file: {:?}", path))?;
    let records = parse_feed(&body).with_context(|| format!("Invalid feed file: {:?}", path))?;
    info!("Read {} feed records from {:?}", records.len(), path);
    Ok(records)
}

/// Resolve config, load records and build the dataset.
pub async fn load_dataset(args: &FeedArgs) -> anyhow::Result<(MapConfig, Dataset)> {
    let config = args.resolve_config()?;
    let records = load_records(args, &config).await?;
    let dataset = Dataset::from_records(&records).context("No data available")?;
    Ok((config, dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const FEED: &str = include_str!("../fixtures/feed.json");

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ccm-cmd-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_records_from_file() {
        let path = temp_file("feed.json", FEED);
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].country.as_deref(), Some("Australia"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_records_reports_path() {
        let path = temp_file("broken.json", "{ nope");
        let err = read_records(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid feed file"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_feed_url_override() {
        let args = FeedArgs {
            feed_url: Some("http://localhost:8080/feed".to_string()),
            ..FeedArgs::default()
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.feed_url, "http://localhost:8080/feed");
        assert_eq!(config.circle_opacity, 0.75);
    }

    #[test]
    fn test_config_file_then_override() {
        let path = temp_file("config.json", r#"{ "feed_url": "http://a/", "circle_opacity": 0.4 }"#);
        let mut args = FeedArgs {
            config: Some(path.to_string_lossy().into_owned()),
            ..FeedArgs::default()
        };
        assert_eq!(args.resolve_config().unwrap().feed_url, "http://a/");
        args.feed_url = Some("http://b/".to_string());
        let config = args.resolve_config().unwrap();
        assert_eq!(config.feed_url, "http://b/");
        assert_eq!(config.circle_opacity, 0.4);
        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_load_dataset_from_input() {
        let path = temp_file("dataset.json", FEED);
        let args = FeedArgs {
            input: Some(path.to_string_lossy().into_owned()),
            ..FeedArgs::default()
        };
        let (_, dataset) = load_dataset(&args).await.unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.scale().range().max, 1000);
        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_empty_feed_is_an_error() {
        let path = temp_file("empty.json", "[]");
        let args = FeedArgs {
            input: Some(path.to_string_lossy().into_owned()),
            ..FeedArgs::default()
        };
        let err = load_dataset(&args).await.unwrap_err();
        assert!(err.to_string().contains("No data available"));
        fs::remove_file(path).unwrap();
    }
}
