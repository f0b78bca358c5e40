//! Reusable Dioxus RSX components for the GWL dashboard page.
//!
//! Components are rendered to static HTML by `dioxus-ssr`; the browser-side
//! `dashboard.js` wires their controls to the update endpoints by id.

mod chart_container;
mod dashboard_header;
mod error_display;
mod multi_select;
mod text_panel;
mod variable_selector;

pub use chart_container::ChartContainer;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use multi_select::MultiSelect;
pub use text_panel::TextPanel;
pub use variable_selector::VariableSelector;
