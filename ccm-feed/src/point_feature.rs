use crate::error::{DataError, Result};
use crate::raw_record::{Coordinate, RawRecord};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subregion value the feed uses when a location has no province.
pub const NULL_SUBREGION: &str = "null";

/// Identity of a point within one dataset load.
///
/// Identities are the 0-based position of the record in the feed, so they
/// are dense `[0, N)` for a load of N records. They are only meaningful
/// against the load that produced them; a refetch reassigns them.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub usize);

impl FeatureId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A normalized location point, immutable once created.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PointFeature {
    pub id: FeatureId,
    pub longitude: f64,
    pub latitude: f64,
    /// Country or region name as reported by the feed
    pub region: String,
    /// Province/state; `None` means "no subregion"
    pub subregion: Option<String>,
    pub county: Option<String>,
    /// Confirmed case count
    pub cases: u64,
    pub deaths: u64,
    pub updated_at: Option<NaiveDateTime>,
}

impl PointFeature {
    /// Build the feature for the record at position `index`.
    pub fn from_raw(index: usize, record: &RawRecord) -> Result<Self> {
        let region = record
            .country
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DataError::malformed(index, "missing country"))?
            .to_string();

        let coords = record
            .coordinates
            .as_ref()
            .ok_or_else(|| DataError::malformed(index, "missing coordinates"))?;
        let longitude = coordinate(index, "coordinates.longitude", coords.longitude.as_ref())?;
        let latitude = coordinate(index, "coordinates.latitude", coords.latitude.as_ref())?;

        let stats = record
            .stats
            .as_ref()
            .ok_or_else(|| DataError::malformed(index, "missing stats"))?;
        let cases = stats
            .confirmed
            .ok_or_else(|| DataError::malformed(index, "missing stats.confirmed"))?;
        let deaths = stats
            .deaths
            .ok_or_else(|| DataError::malformed(index, "missing stats.deaths"))?;
        if deaths > cases {
            debug!(
                "Record {} ({}) reports more deaths ({}) than cases ({})",
                index, region, deaths, cases
            );
        }

        let updated_at = record.updated_at.as_deref().and_then(|s| {
            ccm_utils::dates::parse_feed_timestamp(s)
                .map_err(|e| debug!("Record {}: ignoring updatedAt {:?}: {}", index, s, e))
                .ok()
        });

        Ok(PointFeature {
            id: FeatureId(index),
            longitude,
            latitude,
            region,
            subregion: normalize_subregion(record.province.as_deref()),
            county: normalize_subregion(record.county.as_deref()),
            cases,
            deaths,
            updated_at,
        })
    }
}

fn coordinate(index: usize, field: &str, value: Option<&Coordinate>) -> Result<f64> {
    match value {
        None => Err(DataError::malformed(index, format!("missing {}", field))),
        Some(c) => c
            .value()
            .ok_or_else(|| DataError::malformed(index, format!("non-numeric {}: {:?}", field, c))),
    }
}

/// Map the feed's "no subregion" spellings (absent, empty, the string
/// `"null"`) to `None`.
pub fn normalize_subregion(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != NULL_SUBREGION)
        .map(str::to_string)
}

/// Transform feed records into point features, preserving order.
///
/// Feature `i` gets identity `FeatureId(i)`. The transform is atomic: the
/// first malformed record fails the whole call, so callers never see a
/// partially valid dataset.
pub fn transform_records(records: &[RawRecord]) -> Result<Vec<PointFeature>> {
    let features = records
        .iter()
        .enumerate()
        .map(|(index, record)| PointFeature::from_raw(index, record))
        .collect::<Result<Vec<PointFeature>>>()?;
    info!("Transformed {} feed records into points", features.len());
    Ok(features)
}

/// Most recent `updated_at` across a set of features.
pub fn latest_update(features: &[PointFeature]) -> Option<NaiveDateTime> {
    features.iter().filter_map(|f| f.updated_at).max()
}
