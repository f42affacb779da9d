//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (mapbox-gl renders into this)
    pub id: String,
    /// Map height as a CSS length
    #[props(default = "100vh".to_string())]
    pub height: String,
    /// Overlays drawn on top of the map
    pub children: Element,
}

/// A positioned container for the mapbox-gl canvas plus overlays.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("position: relative; width: 100%; height: {};", props.height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "position: absolute; top: 0; bottom: 0; width: 100%;",
            }
            {props.children}
        }
    }
}
