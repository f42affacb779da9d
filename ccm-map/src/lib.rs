//! Case map interaction core.
//!
//! Owns everything between a decoded feed and a rendering engine: the
//! active [`dataset::Dataset`], hover tracking, tooltip anchoring across
//! wrapped world copies, tooltip content and the map configuration.
//! [`session::MapSession`] ties these together.

pub mod anchor;
pub mod config;
pub mod country;
pub mod dataset;
pub mod hover;
pub mod session;
pub mod tooltip;

pub use anchor::{normalize_longitude, tooltip_anchor, LngLat, TooltipAnchor};
pub use config::{MapConfig, ViewState};
pub use country::{CountryLookup, CountryTable, NoLookup};
pub use dataset::{Dataset, PointLayer};
pub use hover::{HoverState, HoverTracker};
pub use session::{HoverCommand, MapSession, PointerHit};
pub use tooltip::{Flag, MortalityRate, TooltipBuilder, TooltipContent};
