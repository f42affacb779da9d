//! Color legend for the case circles.

use crate::state::LegendEntry;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CaseLegendProps {
    pub entries: Vec<LegendEntry>,
}

/// One swatch per color stop, smallest case count first.
#[component]
pub fn CaseLegend(props: CaseLegendProps) -> Element {
    if props.entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: absolute; bottom: 24px; right: 12px; z-index: 2; padding: 8px 12px; background: rgba(255,255,255,0.9); border-radius: 4px; font-size: 12px;",
            strong { "Confirmed cases" }
            // Rounded counts can repeat on narrow ranges; key rows by position
            for (i, entry) in props.entries.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; align-items: center; margin-top: 2px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; margin-right: 6px; border-radius: 50%; background: {entry.color};",
                    }
                    "{entry.cases}"
                }
            }
        }
    }
}
