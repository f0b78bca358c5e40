//! Multi-value selector used for regions and sites.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectProps {
    /// DOM id of the `<select>`
    pub id: String,
    pub label: String,
    /// Shown by `dashboard.js` while nothing is selected
    pub placeholder: String,
    /// Initial options; the site selector starts empty and is filled later
    #[props(default = Vec::new())]
    pub options: Vec<String>,
}

/// A labelled `<select multiple>`.
#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    rsx! {
        div {
            class: "control",
            label {
                r#for: "{props.id}",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                multiple: true,
                "data-placeholder": "{props.placeholder}",
                for opt in props.options.iter() {
                    option {
                        value: "{opt}",
                        "{opt}"
                    }
                }
            }
        }
    }
}
