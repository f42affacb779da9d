//! Simulated hover on a single feature.

use crate::source::{load_dataset, FeedArgs};
use anyhow::anyhow;
use ccm_feed::FeatureId;
use ccm_map::{CountryTable, Dataset, HoverCommand, LngLat, MapConfig, MapSession, PointerHit};

/// Run one pointer-move through a session and render what the map would
/// show. Without a pointer longitude the pointer sits on the feature.
pub fn inspect_lines(
    config: &MapConfig,
    dataset: Dataset,
    id: usize,
    pointer_lng: Option<f64>,
) -> anyhow::Result<Vec<String>> {
    let feature = dataset
        .feature(FeatureId(id))
        .ok_or_else(|| anyhow!("No feature {} (dataset has {})", id, dataset.len()))?;
    let pointer = LngLat::new(pointer_lng.unwrap_or(feature.longitude), feature.latitude);

    let mut session = MapSession::new(config.tooltip_builder(CountryTable::builtin()));
    session.replace_dataset(dataset);
    match session.on_pointer_move(PointerHit::new(FeatureId(id), pointer)) {
        Some(HoverCommand::Show { anchor, content, .. }) => {
            let mut lines: Vec<String> = content
                .lines()
                .into_iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect();
            if let Some(flag) = &content.flag {
                lines.push(format!("Flag: {}", flag.image_url));
            }
            lines.push(format!("Anchor: {:.5}, {:.5}", anchor.lng, anchor.lat));
            Ok(lines)
        }
        other => Err(anyhow!("Hover on feature {} produced {:?}", id, other)),
    }
}

pub async fn run_inspect(feed: &FeedArgs, id: usize, pointer_lng: Option<f64>) -> anyhow::Result<()> {
    let (config, dataset) = load_dataset(feed).await?;
    for line in inspect_lines(&config, dataset, id, pointer_lng)? {
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
    fn test_inspect_italy() {
        let lines = inspect_lines(&MapConfig::default(), dataset(), 0, None).unwrap();
        assert_eq!(
            lines,
            vec![
                "Country: Italy",
                "Cases: 1000",
                "Deaths: 50",
                "Mortality Rate: 5.00%",
                "Flag: https://www.countryflags.io/IT/flat/64.png",
                "Anchor: 12.56738, 41.87194",
            ]
        );
    }

    #[test]
    fn test_inspect_wrapped_pointer() {
        let lines = inspect_lines(&MapConfig::default(), dataset(), 1, Some(-200.0)).unwrap();
        assert!(lines.contains(&"Province: New South Wales".to_string()));
        assert_eq!(lines.last().unwrap(), "Anchor: -208.79070, -33.86880");
    }

    #[test]
    fn test_inspect_zero_cases() {
        let lines = inspect_lines(&MapConfig::default(), dataset(), 2, None).unwrap();
        assert!(lines.contains(&"Mortality Rate: N/A".to_string()));
        assert!(lines.iter().all(|l| !l.starts_with("Flag:")));
    }

    #[test]
    fn test_inspect_unknown_id() {
        assert!(inspect_lines(&MapConfig::default(), dataset(), 9, None).is_err());
    }
}
