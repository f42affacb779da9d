//! The boundary between the case map core and a rendering engine.
//!
//! The engine feeds pointer events in and receives [`HoverCommand`]s back;
//! it never touches hover state or tooltip content directly. Dataset swaps
//! go through the session too, so a reload and the hover reset that must
//! accompany it happen in one step.

use crate::anchor::{tooltip_anchor, LngLat, TooltipAnchor};
use crate::country::CountryLookup;
use crate::dataset::{Dataset, PointLayer};
use crate::hover::{HoverState, HoverTracker};
use crate::tooltip::{TooltipBuilder, TooltipContent};
use ccm_feed::error::Result;
use ccm_feed::{FeatureId, RawRecord};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// A pointer-move hit on the point layer.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct PointerHit {
    /// Identity of the topmost feature under the pointer
    pub id: FeatureId,
    /// Pointer position; longitude may lie outside [-180, 180] on a wrapped map
    pub lng: f64,
    pub lat: f64,
}

impl PointerHit {
    pub fn new(id: FeatureId, pointer: LngLat) -> Self {
        PointerHit {
            id,
            lng: pointer.lng,
            lat: pointer.lat,
        }
    }

    pub fn pointer(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }
}

/// Instruction for the rendering engine.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HoverCommand {
    Show {
        id: FeatureId,
        anchor: TooltipAnchor,
        content: TooltipContent,
    },
    Hide,
}

/// Active dataset plus hover state for one map.
pub struct MapSession<L> {
    dataset: Option<Dataset>,
    tracker: HoverTracker,
    tooltips: TooltipBuilder<L>,
}

impl<L: CountryLookup> MapSession<L> {
    /// A session with no dataset yet (fetch pending).
    pub fn new(tooltips: TooltipBuilder<L>) -> Self {
        MapSession {
            dataset: None,
            tracker: HoverTracker::new(),
            tooltips,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn hover_state(&self) -> HoverState {
        self.tracker.state()
    }

    /// Swap in a new dataset and forget the hovered identity.
    pub fn replace_dataset(&mut self, dataset: Dataset) -> &Dataset {
        info!("Replacing dataset ({} points)", dataset.len());
        self.tracker.reset();
        self.dataset.insert(dataset)
    }

    /// Drop the dataset, e.g. after a failed fetch.
    pub fn clear_dataset(&mut self) {
        self.tracker.reset();
        self.dataset = None;
    }

    /// Build a dataset from fetched records and make it active.
    ///
    /// On failure the session ends up with no dataset at all, never with a
    /// partially valid one.
    pub fn load_records(&mut self, records: &[RawRecord]) -> Result<&Dataset> {
        match Dataset::from_records(records) {
            Ok(dataset) => Ok(self.replace_dataset(dataset)),
            Err(e) => {
                warn!("No data available: {}", e);
                self.clear_dataset();
                Err(e)
            }
        }
    }

    /// Layer description for the active dataset.
    pub fn point_layer(&self, circle_opacity: f64) -> Option<PointLayer> {
        self.dataset.as_ref().map(|d| d.point_layer(circle_opacity))
    }

    /// Pointer moved over a feature. Returns a command only when the hovered
    /// feature changed.
    pub fn on_pointer_move(&mut self, hit: PointerHit) -> Option<HoverCommand> {
        let dataset = match &self.dataset {
            Some(d) => d,
            None => {
                debug!("Pointer hit {} with no dataset loaded", hit.id);
                return None;
            }
        };
        let feature = match dataset.feature(hit.id) {
            Some(f) => f,
            None => {
                warn!(
                    "Pointer hit unknown feature {} (dataset has {})",
                    hit.id,
                    dataset.len()
                );
                return None;
            }
        };
        let id = self.tracker.on_hit(hit.id)?;
        Some(HoverCommand::Show {
            id,
            anchor: tooltip_anchor(
                LngLat::new(feature.longitude, feature.latitude),
                hit.pointer(),
            ),
            content: self.tooltips.build(feature),
        })
    }

    /// Pointer left the point layer; always hides the tooltip.
    pub fn on_pointer_leave(&mut self) -> HoverCommand {
        self.tracker.on_leave();
        HoverCommand::Hide
    }
}
