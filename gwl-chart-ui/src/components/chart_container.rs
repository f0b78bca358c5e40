//! Host element for the water level chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Target id passed to `renderLineChart`
    pub id: String,
    /// Pixels reserved before the SVG is drawn
    #[props(default = 450)]
    pub min_height: u32,
}

/// Holds a "Loading chart..." note until the first figure replaces it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
                div { class: "chart-loading", "Loading chart..." }
            }
        }
    }
}
