//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The map session itself is not reactive; it lives behind [`SharedSession`]
//! so pointer callbacks from JS can reach it.

use ccm_map::{CountryTable, Dataset, MapConfig, MapSession};
use ccm_scale::CaseRange;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Session shared between the fetch task and the pointer callbacks.
pub type SharedSession = Rc<RefCell<MapSession<&'static CountryTable>>>;

pub fn new_session(config: &MapConfig) -> SharedSession {
    Rc::new(RefCell::new(MapSession::new(
        config.tooltip_builder(CountryTable::builtin()),
    )))
}

/// One legend row: a case count and its color on the map.
#[derive(Clone, PartialEq, Debug)]
pub struct LegendEntry {
    pub cases: u64,
    pub color: String,
}

/// Legend rows for a loaded dataset, one per color stop. Counts are rounded
/// for display, so neighbouring rows may show the same number.
pub fn legend_entries(dataset: &Dataset) -> Vec<LegendEntry> {
    dataset
        .scale()
        .color_stops()
        .into_iter()
        .map(|(cases, color)| LegendEntry {
            cases: cases.round() as u64,
            color: color.to_hex(),
        })
        .collect()
}

/// Shared application state for the case map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a feed fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if the last fetch produced no dataset
    pub error_msg: Signal<Option<String>>,
    /// Case range of the active dataset
    pub case_range: Signal<Option<CaseRange>>,
    /// Most recent `updatedAt` in the active dataset, formatted
    pub last_updated: Signal<Option<String>>,
    /// Color legend of the active dataset
    pub legend: Signal<Vec<LegendEntry>>,
    /// Bumped to request a new fetch
    pub refresh: Signal<u32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            case_range: Signal::new(None),
            last_updated: Signal::new(None),
            legend: Signal::new(Vec::new()),
            refresh: Signal::new(0),
        }
    }
}
