//! Loading spinner component.

use dioxus::prelude::*;

/// Overlay shown while the feed is being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); padding: 6px 12px; background: rgba(0,0,0,0.6); color: #fff; border-radius: 4px; font-size: 12px; z-index: 2;",
            "Loading cases..."
        }
    }
}
