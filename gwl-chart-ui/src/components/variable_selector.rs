//! Dropdown for the measured water-level variable.

use dioxus::prelude::*;
use gwl_core::Variable;

#[derive(Props, Clone, PartialEq)]
pub struct VariableSelectorProps {
    pub id: String,
    /// Variable selected on page load
    #[props(default)]
    pub selected: Variable,
}

/// Single-value selector over [`Variable::ALL`].
///
/// The initial choice travels as `data-default`; `dashboard.js` applies it.
#[component]
pub fn VariableSelector(props: VariableSelectorProps) -> Element {
    let default_key = props.selected.key();
    let choices: Vec<(&str, &str)> = Variable::ALL.iter().map(|v| (v.key(), v.label())).collect();
    rsx! {
        div {
            class: "control",
            label {
                r#for: "{props.id}",
                "Water level variable:"
            }
            select {
                id: "{props.id}",
                "data-default": "{default_key}",
                for (key, label) in choices {
                    option {
                        value: "{key}",
                        "{label}"
                    }
                }
            }
        }
    }
}
