//! Reusable Dioxus RSX components for the case map app.

mod case_legend;
mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;

pub use case_legend::CaseLegend;
pub use error_display::{error_summary, ErrorDisplay};
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
