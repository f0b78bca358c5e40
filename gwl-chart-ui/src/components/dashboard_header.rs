//! Page header with title and the trend-method note.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    /// Page title
    pub title: String,
    /// Short description under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered page header.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        header {
            class: "dashboard-header",
            h1 { "{props.title}" }
            if !props.subtitle.is_empty() {
                p { class: "subtitle", "{props.subtitle}" }
            }
        }
    }
}
