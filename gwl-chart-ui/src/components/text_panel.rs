//! Bordered text output panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextPanelProps {
    /// DOM id the update script writes into
    pub id: String,
    pub label: String,
    /// Text shown before the first update
    #[props(default = String::new())]
    pub initial: String,
    /// CSS width, e.g. "50%"
    #[props(default = "80%".to_string())]
    pub width: String,
}

#[component]
pub fn TextPanel(props: TextPanelProps) -> Element {
    let style = format!("width: {};", props.width);
    rsx! {
        div {
            class: "panel",
            label { "{props.label}" }
            div {
                id: "{props.id}",
                class: "panel-body",
                style: "{style}",
                "{props.initial}"
            }
        }
    }
}
