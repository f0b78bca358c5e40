//! Failure notice shown instead of the dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What the operator can try next
    #[props(default = "Check the server log and the observations CSV.".to_string())]
    pub hint: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-display",
            "role": "alert",
            strong { "Dashboard unavailable: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p { class: "error-hint", "{props.hint}" }
            }
        }
    }
}
