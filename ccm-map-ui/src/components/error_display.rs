//! Banner shown when the last fetch left the map without a dataset.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Why the dataset is missing
    pub message: String,
    /// Feed URL the failed fetch went to
    #[props(default = String::new())]
    pub source: String,
    /// Shows a retry button when set
    pub on_retry: Option<EventHandler<()>>,
}

/// Message line for the banner; names the feed when one is known.
pub fn error_summary(message: &str, source: &str) -> String {
    let message = message.trim();
    let message = if message.is_empty() { "unknown error" } else { message };
    let source = source.trim();
    if source.is_empty() {
        message.to_string()
    } else {
        format!("{} (feed: {})", message, source)
    }
}

/// "No data available" banner with the reason and an optional retry.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let summary = error_summary(&props.message, &props.source);
    let on_retry = props.on_retry;

    rsx! {
        div {
            style: "padding: 10px 12px; background: rgba(40,20,20,0.9); color: #ffcdd2; border-radius: 4px; border-left: 3px solid #e53935; font-size: 12px;",
            strong { "No data available" }
            p {
                style: "margin: 4px 0 0 0; word-break: break-all;",
                "{summary}"
            }
            if let Some(on_retry) = on_retry {
                button {
                    style: "margin-top: 6px;",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
