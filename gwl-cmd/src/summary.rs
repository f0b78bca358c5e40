//! `summary` subcommand: the dashboard's text outputs on stdout.

use crate::dashboard::{self, DashboardView};
use gwl_core::FilterSelection;
use gwl_data::trend::TrendConfig;
use gwl_db::Database;
use gwl_utils::dates::format_date;

/// Compute the view for `selection` and render it as text or JSON.
pub fn render_summary(
    db: &Database,
    selection: &FilterSelection,
    config: &TrendConfig,
    json: bool,
) -> anyhow::Result<String> {
    let view = dashboard::update_dashboard(db, selection, config)?;
    if json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    let label = dashboard::region_label(db, &selection.site_ids)?;
    Ok(format_text(selection, &label, &view))
}

fn format_text(selection: &FilterSelection, label: &str, view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&format!("Variable: {}\n", selection.variable.label()));
    if selection.has_sites() {
        out.push_str(&format!("Regions of selected sites: {}\n", label));
    }
    out.push_str(&format!("{}\n", view.figure.title));
    for series in &view.figure.series {
        let span = match (series.points.first(), series.points.last()) {
            (Some(first), Some(last)) => {
                format!(", {} to {}", format_date(&first.date), format_date(&last.date))
            }
            _ => String::new(),
        };
        out.push_str(&format!(
            "  {}: {} readings{}\n",
            series.name,
            series.points.len(),
            span
        ));
    }
    for line in &view.trend_lines {
        out.push_str(&format!("{}\n", line));
    }
    out.push_str(&view.summary);
    out.push('\n');
    out
}
