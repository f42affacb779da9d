//! Case feed model and transformation.
//!
//! The feed is a JSON array of per-location records (coordinates plus
//! confirmed/death counts). This crate decodes it into [`raw_record::RawRecord`]s
//! and turns those into identity-tagged [`point_feature::PointFeature`]s.
//! With the `api` feature it can also fetch the feed over HTTP.

pub mod error;
#[cfg(feature = "api")]
pub mod fetch;
pub mod point_feature;
pub mod raw_record;

pub use error::{DataError, Result};
pub use point_feature::{transform_records, FeatureId, PointFeature};
pub use raw_record::{parse_feed, RawRecord};

/// Default public mirror of the JHU CSSE per-location feed.
pub const DEFAULT_FEED_URL: &str = "https://corona.lmao.ninja/v2/jhucsse";
