//! Point layer snapshot and dataset statistics.

use crate::source::{load_dataset, FeedArgs};
use ccm_map::{Dataset, MapConfig};
use ccm_utils::dates::format_timestamp;
use ccm_utils::numbers::format_fixed;
use log::info;
use serde_json::{json, Value};

/// Everything a renderer needs to draw the map: style, camera and layer.
pub fn snapshot_json(config: &MapConfig, dataset: &Dataset) -> Value {
    json!({
        "style": config.style_url,
        "view": config.view,
        "layer": dataset.point_layer(config.circle_opacity),
    })
}

/// Human-readable summary of the dataset's case range.
pub fn stats_lines(dataset: &Dataset) -> Vec<String> {
    let range = dataset.scale().range();
    let latest = dataset
        .latest_update()
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_else(|| "unknown".to_string());
    let deaths: u64 = dataset.features().iter().map(|f| f.deaths).sum();
    let cases: u64 = dataset.features().iter().map(|f| f.cases).sum();
    vec![
        format!("Points:        {}", range.count),
        format!("Min cases:     {}", range.min),
        format!("Max cases:     {}", range.max),
        format!("Mean cases:    {}", format_fixed(range.mean, 1)),
        format!("Total cases:   {}", cases),
        format!("Total deaths:  {}", deaths),
        format!("Latest update: {}", latest),
    ]
}

pub async fn run_snapshot(feed: &FeedArgs, output: &str) -> anyhow::Result<()> {
    let (config, dataset) = load_dataset(feed).await?;
    let snapshot = snapshot_json(&config, &dataset);
    std::fs::write(output, serde_json::to_string_pretty(&snapshot)?)?;
    info!(
        "Snapshot complete. {} points written to {}",
        dataset.len(),
        output
    );
    Ok(())
}

pub async fn run_stats(feed: &FeedArgs) -> anyhow::Result<()> {
    let (_, dataset) = load_dataset(feed).await?;
    for line in stats_lines(&dataset) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccm_feed::parse_feed;

    fn dataset() -> Dataset {
        let records = parse_feed(include_str!("../fixtures/feed.json")).unwrap();
        Dataset::from_records(&records).unwrap()
    }

    #[test]
    fn test_snapshot_json() {
        let config = MapConfig::default();
        let snapshot = snapshot_json(&config, &dataset());
        assert_eq!(snapshot["view"]["zoom"], 2.0);
        assert_eq!(snapshot["layer"]["paint"]["circle-opacity"], 0.75);
        assert_eq!(
            snapshot["layer"]["source"]["features"].as_array().unwrap().len(),
            3
        );
    }

    #[test]
    fn test_stats_lines() {
        let lines = stats_lines(&dataset());
        assert_eq!(lines[0], "Points:        3");
        assert_eq!(lines[1], "Min cases:     0");
        assert_eq!(lines[2], "Max cases:     1000");
        assert_eq!(lines[3], "Mean cases:    400.0");
        assert_eq!(lines[5], "Total deaths:  52");
        assert_eq!(lines[6], "Latest update: 2020-04-01 11:00");
    }
}
