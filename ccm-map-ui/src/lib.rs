//! Shared Dioxus components and mapbox-gl bridge for the case map app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the mapbox-gl map functions via `js_sys::eval()`,
//!   plus pointer callbacks and the feed fetch
//! - `popup`: tooltip HTML rendering
//! - `state`: Reactive AppState with Dioxus Signals and the shared map session
//! - `components`: Reusable RSX components (header, map container, legend, etc.)

pub mod components;
pub mod js_bridge;
pub mod popup;
pub mod state;
