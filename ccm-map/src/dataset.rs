//! One dataset load: the point features together with the scale derived
//! from them.

use ccm_feed::error::Result;
use ccm_feed::point_feature::latest_update;
use ccm_feed::{transform_records, FeatureId, PointFeature, RawRecord};
use ccm_scale::ChannelScale;
use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;
use serde_json::{json, Value};

/// Points and their [`ChannelScale`], built in one fallible step.
///
/// Feature identities are only valid against the `Dataset` that produced
/// them; a reload builds a new `Dataset` with reassigned identities.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<PointFeature>,
    scale: ChannelScale,
}

/// What the rendering engine is initialized with.
#[derive(Debug, Clone, Serialize)]
pub struct PointLayer {
    /// GeoJSON `FeatureCollection`
    pub source: Value,
    /// mapbox-gl `circle` paint properties
    pub paint: Value,
}

impl Dataset {
    /// Transform feed records and derive the scale. Fails on the first
    /// malformed record or when there are no records at all.
    pub fn from_records(records: &[RawRecord]) -> Result<Self> {
        let features = transform_records(records)?;
        let scale = ChannelScale::from_features(&features)?;
        info!("Dataset ready: {} points", features.len());
        Ok(Dataset { features, scale })
    }

    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    pub fn feature(&self, id: FeatureId) -> Option<&PointFeature> {
        self.features.get(id.index())
    }

    pub fn scale(&self) -> &ChannelScale {
        &self.scale
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Always false for a constructed dataset; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn latest_update(&self) -> Option<NaiveDateTime> {
        latest_update(&self.features)
    }

    /// GeoJSON `FeatureCollection`; each feature's top-level `id` is its
    /// identity so that pointer hits report it back.
    pub fn geojson(&self) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .map(|f| {
                json!({
                    "type": "Feature",
                    "id": f.id,
                    "geometry": {
                        "type": "Point",
                        "coordinates": [f.longitude, f.latitude],
                    },
                    "properties": {
                        "country": f.region,
                        "province": f.subregion,
                        "cases": f.cases,
                        "deaths": f.deaths,
                    },
                })
            })
            .collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }

    pub fn point_layer(&self, circle_opacity: f64) -> PointLayer {
        PointLayer {
            source: self.geojson(),
            paint: self.scale.paint(circle_opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccm_feed::DataError;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("Italy", Some("null"), 12.56738, 41.87194, 1000, 50),
            RawRecord::new("Australia", Some("New South Wales"), 151.2093, -33.8688, 200, 2),
        ]
    }

    #[test]
    fn test_from_records() {
        let dataset = Dataset::from_records(&records()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.feature(FeatureId(1)).unwrap().region, "Australia");
        assert!(dataset.feature(FeatureId(2)).is_none());
        assert_eq!(dataset.scale().range().max, 1000);
        assert_eq!(dataset.scale().range().min, 200);
    }

    #[test]
    fn test_empty_feed_is_empty_dataset_error() {
        assert!(matches!(
            Dataset::from_records(&[]),
            Err(DataError::EmptyDataset)
        ));
    }

    #[test]
    fn test_malformed_record_yields_no_dataset() {
        let mut recs = records();
        recs[1].stats = None;
        assert!(matches!(
            Dataset::from_records(&recs),
            Err(DataError::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_geojson_shape() {
        let dataset = Dataset::from_records(&records()).unwrap();
        let geojson = dataset.geojson();
        assert_eq!(geojson["type"], "FeatureCollection");
        let first = &geojson["features"][0];
        assert_eq!(first["id"], 0);
        assert_eq!(first["geometry"]["coordinates"][0], 12.56738);
        assert_eq!(first["properties"]["cases"], 1000);
        assert!(first["properties"]["province"].is_null());
        assert_eq!(geojson["features"][1]["properties"]["province"], "New South Wales");
    }

    #[test]
    fn test_point_layer_carries_paint() {
        let dataset = Dataset::from_records(&records()).unwrap();
        let layer = dataset.point_layer(0.5);
        assert_eq!(layer.paint["circle-opacity"], 0.5);
        assert!(layer.paint["circle-radius"].is_array());
        let serialized = serde_json::to_value(&layer).unwrap();
        assert!(serialized["source"]["features"].is_array());
    }
}
