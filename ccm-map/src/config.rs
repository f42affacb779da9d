use crate::country::CountryLookup;
use crate::tooltip::{TooltipBuilder, DEFAULT_FLAG_URL_TEMPLATE};
use anyhow::{bail, Context, Result};
use ccm_scale::paint::DEFAULT_CIRCLE_OPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Camera position the map opens with.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewState {
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            center: [16.0, 27.0],
            zoom: 2.0,
            pitch: 20.0,
            bearing: 0.0,
        }
    }
}

/// Case map settings. Every field is optional in the JSON file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub feed_url: String,
    pub style_url: String,
    /// mapbox access token; the web app falls back to the build-time
    /// `MAPBOX_ACCESS_TOKEN`
    pub access_token: Option<String>,
    pub view: ViewState,
    pub circle_opacity: f64,
    pub flag_url_template: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            feed_url: ccm_feed::DEFAULT_FEED_URL.to_string(),
            style_url: "mapbox://styles/mapbox/dark-v10".to_string(),
            access_token: None,
            view: ViewState::default(),
            circle_opacity: DEFAULT_CIRCLE_OPACITY,
            flag_url_template: DEFAULT_FLAG_URL_TEMPLATE.to_string(),
        }
    }
}

impl MapConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: MapConfig =
            serde_json::from_str(content).context("Failed to parse JSON configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.circle_opacity) {
            bail!("circle_opacity must be within [0, 1], got {}", self.circle_opacity);
        }
        if !self.flag_url_template.contains("{iso}") {
            bail!(
                "flag_url_template must contain an {{iso}} placeholder: {}",
                self.flag_url_template
            );
        }
        if self.feed_url.trim().is_empty() {
            bail!("feed_url must not be empty");
        }
        Ok(())
    }

    pub fn tooltip_builder<L: CountryLookup>(&self, lookup: L) -> TooltipBuilder<L> {
        TooltipBuilder::with_flag_template(lookup, &self.flag_url_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert_eq!(config.feed_url, "https://corona.lmao.ninja/v2/jhucsse");
        assert_eq!(config.view.center, [16.0, 27.0]);
        assert_eq!(config.view.zoom, 2.0);
        assert_eq!(config.view.pitch, 20.0);
        assert_eq!(config.circle_opacity, 0.75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            MapConfig::from_json_str(r#"{ "circle_opacity": 0.5, "view": { "zoom": 3 } }"#)
                .unwrap();
        assert_eq!(config.circle_opacity, 0.5);
        assert_eq!(config.view.zoom, 3.0);
        assert_eq!(config.view.center, [16.0, 27.0]);
        assert_eq!(config.flag_url_template, DEFAULT_FLAG_URL_TEMPLATE);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(MapConfig::from_json_str(r#"{ "circle_opacity": 1.5 }"#).is_err());
        assert!(MapConfig::from_json_str(r#"{ "flag_url_template": "/flags.png" }"#).is_err());
        assert!(MapConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = MapConfig::load_from_file(Path::new("/nonexistent/ccm.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
