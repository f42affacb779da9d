//! Map header with title, feed timestamp and refresh control.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    pub title: String,
    /// Formatted latest `updatedAt` of the loaded dataset
    #[props(default = String::new())]
    pub last_updated: String,
    /// Number of points on the map (0 while there is no dataset)
    #[props(default = 0)]
    pub point_count: usize,
    /// Disable the refresh button while a fetch is in flight
    #[props(default = false)]
    pub loading: bool,
    pub on_refresh: EventHandler<()>,
}

#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    let on_refresh = props.on_refresh;

    rsx! {
        div {
            style: "position: absolute; top: 12px; left: 12px; z-index: 2; padding: 8px 12px; background: rgba(255,255,255,0.9); border-radius: 4px; font-size: 12px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if props.point_count > 0 {
                p { style: "margin: 0;", "{props.point_count} locations" }
            }
            if !props.last_updated.is_empty() {
                p { style: "margin: 0; color: #666;", "Updated {props.last_updated}" }
            }
            button {
                style: "margin-top: 6px;",
                disabled: props.loading,
                onclick: move |_| on_refresh.call(()),
                "Refresh"
            }
        }
    }
}
