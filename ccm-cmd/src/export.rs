//! CSV export of the point features.

use crate::source::{load_dataset, FeedArgs};
use ccm_feed::PointFeature;
use ccm_utils::dates::format_timestamp;
use log::info;
use std::io::Write;

const HEADER: [&str; 8] = [
    "id",
    "country",
    "province",
    "longitude",
    "latitude",
    "cases",
    "deaths",
    "updated_at",
];

/// Write one row per feature; missing optional fields are empty cells.
pub fn write_points_csv<W: Write>(features: &[PointFeature], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for f in features {
        wtr.write_record([
            f.id.to_string(),
            f.region.clone(),
            f.subregion.clone().unwrap_or_default(),
            f.longitude.to_string(),
            f.latitude.to_string(),
            f.cases.to_string(),
            f.deaths.to_string(),
            f.updated_at.map(|ts| format_timestamp(&ts)).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_export(feed: &FeedArgs, output: &str) -> anyhow::Result<()> {
    let (_, dataset) = load_dataset(feed).await?;
    let file = std::fs::File::create(output)?;
    write_points_csv(dataset.features(), file)?;
    info!("Export complete. {} points written to {}", dataset.len(), output);
    Ok(())
}
