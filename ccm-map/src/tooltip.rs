//! Tooltip payload for a hovered point.

use crate::country::CountryLookup;
use ccm_feed::PointFeature;
use ccm_utils::numbers::{format_fixed, percentage};
use log::debug;
use serde::{Serialize, Serializer};
use std::fmt;

/// Shown instead of a mortality rate when a location has no cases.
pub const MORTALITY_PLACEHOLDER: &str = "N/A";

/// Flag image URL; `{iso}` is replaced with the ISO 3166-1 alpha-2 code.
pub const DEFAULT_FLAG_URL_TEMPLATE: &str = "https://www.countryflags.io/{iso}/flat/64.png";

/// Deaths per hundred confirmed cases.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MortalityRate {
    Percent(f64),
    /// Zero cases: the rate is undefined
    Undefined,
}

impl MortalityRate {
    pub fn new(deaths: u64, cases: u64) -> Self {
        match percentage(deaths, cases) {
            Some(p) => MortalityRate::Percent(p),
            None => MortalityRate::Undefined,
        }
    }
}

impl fmt::Display for MortalityRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MortalityRate::Percent(p) => write!(f, "{}%", format_fixed(*p, 2)),
            MortalityRate::Undefined => f.write_str(MORTALITY_PLACEHOLDER),
        }
    }
}

impl Serialize for MortalityRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Flag {
    pub iso_code: String,
    pub image_url: String,
}

/// Everything the rendering side needs to draw one tooltip.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TooltipContent {
    pub region: String,
    /// Omitted entirely when the point has no subregion
    pub subregion: Option<String>,
    pub cases: u64,
    pub deaths: u64,
    pub mortality_rate: MortalityRate,
    pub flag: Option<Flag>,
}

impl TooltipContent {
    /// Labelled display lines, in display order.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Country", self.region.clone())];
        if let Some(subregion) = &self.subregion {
            lines.push(("Province", subregion.clone()));
        }
        lines.push(("Cases", self.cases.to_string()));
        lines.push(("Deaths", self.deaths.to_string()));
        lines.push(("Mortality Rate", self.mortality_rate.to_string()));
        lines
    }
}

/// Builds [`TooltipContent`] from point features.
#[derive(Debug, Clone)]
pub struct TooltipBuilder<L> {
    lookup: L,
    flag_url_template: String,
}

impl<L: CountryLookup> TooltipBuilder<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_flag_template(lookup, DEFAULT_FLAG_URL_TEMPLATE)
    }

    pub fn with_flag_template(lookup: L, flag_url_template: &str) -> Self {
        TooltipBuilder {
            lookup,
            flag_url_template: flag_url_template.to_string(),
        }
    }

    pub fn build(&self, feature: &PointFeature) -> TooltipContent {
        let mortality_rate = MortalityRate::new(feature.deaths, feature.cases);
        if mortality_rate == MortalityRate::Undefined {
            debug!("No cases at {} ({}); mortality undefined", feature.region, feature.id);
        }
        TooltipContent {
            region: feature.region.clone(),
            subregion: feature.subregion.clone(),
            cases: feature.cases,
            deaths: feature.deaths,
            mortality_rate,
            flag: self.flag(&feature.region),
        }
    }

    fn flag(&self, region: &str) -> Option<Flag> {
        match self.lookup.iso_code(region) {
            Some(iso_code) => Some(Flag {
                image_url: self.flag_url_template.replace("{iso}", &iso_code),
                iso_code,
            }),
            None => {
                debug!("No country code for {:?}; tooltip without flag", region);
                None
            }
        }
    }
}
