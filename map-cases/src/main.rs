//! COVID-19 Case Map
//!
//! Displays confirmed cases per location as circles on a mapbox-gl world
//! map; hovering a circle shows a popup with the location's counts.
//!
//! Data flow:
//! 1. On mount the map is created and pointer callbacks are registered.
//! 2. The case feed is fetched (again on every refresh) and loaded into the
//!    shared `MapSession`, which builds the point layer and its scale.
//! 3. Pointer events from the map go through the session; only the
//!    show/hide commands it returns reach the popup.
//!
//! The mapbox access token comes from `MAPBOX_ACCESS_TOKEN` at build time.

use ccm_feed::parse_feed;
use ccm_map::MapConfig;
use ccm_map_ui::components::{CaseLegend, ErrorDisplay, LoadingSpinner, MapContainer, MapHeader};
use ccm_map_ui::js_bridge;
use ccm_map_ui::state::{legend_entries, new_session, AppState, SharedSession};
use ccm_utils::dates::format_timestamp;
use dioxus::prelude::*;

/// Map container DOM element ID used by mapbox-gl to render into.
const MAP_ID: &str = "case-map";

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("failed to init logger: {}", e).into());
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("case-map-root"))
        .launch(App);
}

fn map_config() -> MapConfig {
    MapConfig {
        access_token: option_env!("MAPBOX_ACCESS_TOKEN").map(str::to_string),
        ..MapConfig::default()
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(map_config);
    let session = use_hook(|| new_session(&config));

    // Create the map and route its pointer events through the session
    use_effect({
        let config = config.clone();
        let session = session.clone();
        move || {
            let token = config.access_token.clone().unwrap_or_default();
            if token.is_empty() {
                log::warn!("No mapbox access token; map tiles will not load");
            }
            js_bridge::init_map(MAP_ID, &config, &token);

            let move_session = session.clone();
            let leave_session = session.clone();
            js_bridge::register_pointer_handlers(
                move |hit| {
                    let command = move_session.borrow_mut().on_pointer_move(hit);
                    if let Some(command) = command {
                        js_bridge::apply_hover_command(&command);
                    }
                },
                move || {
                    let command = leave_session.borrow_mut().on_pointer_leave();
                    js_bridge::apply_hover_command(&command);
                },
            );
        }
    });

    // Fetch on mount and whenever a refresh is requested
    use_effect({
        let config = config.clone();
        let session = session.clone();
        move || {
            let generation = (state.refresh)();
            log::info!("Fetching case feed (refresh {})", generation);
            state.loading.set(true);
            spawn(refresh_dataset(
                session.clone(),
                state,
                config.feed_url.clone(),
                config.circle_opacity,
            ));
        }
    });

    let point_count = (state.case_range)().map(|range| range.count).unwrap_or(0);

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapContainer {
                id: MAP_ID.to_string(),

                MapHeader {
                    title: "COVID-19 Confirmed Cases".to_string(),
                    last_updated: (state.last_updated)().unwrap_or_default(),
                    point_count,
                    loading: (state.loading)(),
                    on_refresh: move |_| *state.refresh.write() += 1,
                }

                if (state.loading)() {
                    LoadingSpinner {}
                }

                if let Some(err) = (state.error_msg)() {
                    div {
                        style: "position: absolute; bottom: 24px; left: 12px; z-index: 2; max-width: 360px;",
                        ErrorDisplay {
                            message: err,
                            source: config.feed_url.clone(),
                            on_retry: move |_| *state.refresh.write() += 1,
                        }
                    }
                }

                CaseLegend { entries: (state.legend)() }
            }
        }
    }
}

/// Fetch the feed and swap it into the session. Whichever fetch completes
/// last determines the dataset; a failed fetch leaves no dataset at all.
async fn refresh_dataset(
    session: SharedSession,
    mut state: AppState,
    url: String,
    circle_opacity: f64,
) {
    let records = match js_bridge::fetch_text(&url).await {
        Ok(body) => parse_feed(&body).map_err(|e| e.to_string()),
        Err(e) => Err(format!("fetch failed: {}", e)),
    };

    let mut session = session.borrow_mut();
    let loaded = match records {
        Ok(records) => session.load_records(&records).map_err(|e| e.to_string()),
        Err(e) => {
            session.clear_dataset();
            Err(e)
        }
    };

    // The session forgot the hovered feature; drop its popup too
    js_bridge::hide_popup();

    match loaded {
        Ok(dataset) => {
            js_bridge::set_point_layer(&dataset.point_layer(circle_opacity));
            state.case_range.set(Some(*dataset.scale().range()));
            state
                .last_updated
                .set(dataset.latest_update().map(|ts| format_timestamp(&ts)));
            state.legend.set(legend_entries(dataset));
            state.error_msg.set(None);
        }
        Err(e) => {
            log::error!("No data available from {}: {}", url, e);
            js_bridge::clear_point_layer();
            state.case_range.set(None);
            state.last_updated.set(None);
            state.legend.set(Vec::new());
            state.error_msg.set(Some(e));
        }
    }
    state.loading.set(false);
}
