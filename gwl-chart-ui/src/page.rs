//! Full-document rendering of the dashboard page.

use crate::assets::{self, D3_SCRIPT_URL};
use crate::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, MultiSelect, TextPanel, VariableSelector,
};
use dioxus::prelude::*;
use gwl_core::Variable;

pub const PAGE_TITLE: &str = "Water Level Trend Analysis";

/// DOM ids shared with `dashboard.js`.
pub const REGION_SELECT_ID: &str = "region-filter";
pub const SITE_SELECT_ID: &str = "site-filter";
pub const SITE_REGIONS_ID: &str = "site-regions-display";
pub const VARIABLE_SELECT_ID: &str = "variable-filter";
pub const CHART_ID: &str = "waterlevel-trend-plot";
pub const TREND_PANEL_ID: &str = "trend-analysis-display";
pub const SUMMARY_PANEL_ID: &str = "region-summary-display";

/// Text of the site-region panel before any site is picked.
pub const NO_SITE_SELECTED: &str = "No site selected";

#[derive(Props, Clone, PartialEq)]
struct DashboardPageProps {
    regions: Vec<String>,
}

#[component]
fn DashboardPage(props: DashboardPageProps) -> Element {
    rsx! {
        main {
            class: "dashboard",
            DashboardHeader {
                title: PAGE_TITLE.to_string(),
                subtitle: "Groundwater level series by region and monitoring site".to_string(),
            }
            MultiSelect {
                id: REGION_SELECT_ID.to_string(),
                label: "Region:".to_string(),
                placeholder: "Select regions".to_string(),
                options: props.regions.clone(),
            }
            MultiSelect {
                id: SITE_SELECT_ID.to_string(),
                label: "Site (UTM):".to_string(),
                placeholder: "Select sites".to_string(),
            }
            TextPanel {
                id: SITE_REGIONS_ID.to_string(),
                label: "Regions of selected sites:".to_string(),
                initial: NO_SITE_SELECTED.to_string(),
                width: "50%".to_string(),
            }
            VariableSelector {
                id: VARIABLE_SELECT_ID.to_string(),
                selected: Variable::default(),
            }
            ChartContainer {
                id: CHART_ID.to_string(),
            }
            TextPanel {
                id: TREND_PANEL_ID.to_string(),
                label: "Mann-Kendall and Sen's slope analysis:".to_string(),
            }
            TextPanel {
                id: SUMMARY_PANEL_ID.to_string(),
                label: "Region-level summary:".to_string(),
            }
        }
    }
}

/// Render the dashboard with `regions` as the region selector's options.
pub fn render_page(regions: &[String]) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        DashboardPage { regions: regions.to_vec() }
    });
    log::debug!("page: rendered dashboard with {} region options", regions.len());
    document(&body, true)
}

/// Render a bare page showing only an error box.
pub fn render_error_page(message: &str) -> String {
    let message = message.to_string();
    let body = dioxus_ssr::render_element(rsx! {
        main {
            class: "dashboard",
            DashboardHeader { title: PAGE_TITLE.to_string() }
            ErrorDisplay { message: message }
        }
    });
    document(&body, false)
}

fn document(body: &str, with_scripts: bool) -> String {
    let css = assets::find("dashboard.css").map(|a| a.url()).unwrap_or_default();
    let scripts = if with_scripts {
        ["line-chart.js", "dashboard.js"]
            .iter()
            .filter_map(|name| assets::find(name))
            .map(|a| format!(r#"<script src="{}"></script>"#, a.url()))
            .collect::<Vec<_>>()
            .join("\n    ")
    } else {
        String::new()
    };
    let d3 = if with_scripts {
        format!(r#"<script src="{D3_SCRIPT_URL}"></script>"#)
    } else {
        String::new()
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE}</title>
    <link rel="stylesheet" href="{css}">
    {d3}
</head>
<body>
    {body}
    {scripts}
</body>
</html>"#
    )
}
