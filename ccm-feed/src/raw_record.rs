use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// A coordinate as the feed supplies it: some mirrors send JSON numbers,
/// others send numeric strings such as `"41.87194"`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Numeric value, or `None` if the text is not a finite number.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(s) => s.trim().parse::<f64>().ok(),
        };
        v.filter(|v| v.is_finite())
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Number(v)
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct RawCoordinates {
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct RawStats {
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub recovered: Option<u64>,
}

/// One location entry of the case feed, as decoded from JSON.
///
/// Required fields are still optional here so that a missing field can be
/// reported with its record index by [`crate::transform_records`] instead of
/// failing deep inside serde.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub country: Option<String>,
    /// Province/state; the feed sometimes sends the literal string `"null"`
    pub province: Option<String>,
    pub county: Option<String>,
    /// "YYYY-MM-DD HH:MM:SS"
    pub updated_at: Option<String>,
    pub stats: Option<RawStats>,
    pub coordinates: Option<RawCoordinates>,
}

impl RawRecord {
    /// Convenience constructor for a fully populated record.
    pub fn new(
        country: &str,
        province: Option<&str>,
        longitude: f64,
        latitude: f64,
        confirmed: u64,
        deaths: u64,
    ) -> Self {
        RawRecord {
            country: Some(country.to_string()),
            province: province.map(str::to_string),
            county: None,
            updated_at: None,
            stats: Some(RawStats {
                confirmed: Some(confirmed),
                deaths: Some(deaths),
                recovered: None,
            }),
            coordinates: Some(RawCoordinates {
                latitude: Some(latitude.into()),
                longitude: Some(longitude.into()),
            }),
        }
    }
}

/// Decode a feed response body into RawRecords.
///
/// The body must be a JSON array. An element whose shape cannot be decoded
/// at all (e.g. a negative or textual count) fails the whole parse with
/// [`DataError::MalformedRecord`] naming its index.
pub fn parse_feed(body: &str) -> Result<Vec<RawRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawRecord>(value)
                .map_err(|e| DataError::malformed(index, e.to_string()))
        })
        .collect()
}
