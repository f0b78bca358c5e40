//! Derived dashboard views.
//!
//! Each function maps (current selection, observation table) to the view
//! state the page shows. They hold no state of their own; the HTTP handlers
//! and the `summary` subcommand both call straight into them.

use gwl_chart_ui::figure::{Figure, NO_DATA_TITLE, NO_REGION_TITLE};
use gwl_chart_ui::page::NO_SITE_SELECTED;
use gwl_core::FilterSelection;
use gwl_data::trend::{analyze, SiteTrend, TrendConfig};
use gwl_db::Database;
use serde::Serialize;
use std::collections::BTreeSet;

/// Label when none of the selected sites maps to a region.
pub const NO_REGION_FOUND: &str = "No region found";

/// Everything a filter change recomputes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub figure: Figure,
    /// One line per explicitly selected site.
    pub trend_lines: Vec<String>,
    pub summary: String,
}

impl DashboardView {
    /// Chart, trend panel and summary all carry the same message.
    pub fn placeholder(message: &str) -> Self {
        Self {
            figure: Figure::placeholder(message),
            trend_lines: vec![message.to_string()],
            summary: message.to_string(),
        }
    }
}

/// Site options for the selected regions; empty selection, empty list.
pub fn site_options(db: &Database, regions: &BTreeSet<String>) -> anyhow::Result<Vec<String>> {
    db.query_sites_for_regions(regions)
}

/// Comma-separated regions of the selected sites.
pub fn region_label(db: &Database, site_ids: &BTreeSet<String>) -> anyhow::Result<String> {
    if site_ids.is_empty() {
        return Ok(NO_SITE_SELECTED.to_string());
    }
    let regions = db.query_regions_for_sites(site_ids)?;
    if regions.is_empty() {
        Ok(NO_REGION_FOUND.to_string())
    } else {
        Ok(regions.join(", "))
    }
}

/// Filter, chart and test in one pass over the selection.
pub fn update_dashboard(
    db: &Database,
    selection: &FilterSelection,
    config: &TrendConfig,
) -> anyhow::Result<DashboardView> {
    if !selection.has_regions() {
        return Ok(DashboardView::placeholder(NO_REGION_TITLE));
    }

    let rows = db.query_filtered(selection)?;
    if rows.is_empty() {
        return Ok(DashboardView::placeholder(NO_DATA_TITLE));
    }

    let figure = Figure::line_chart(
        rows.iter().map(|r| (r.site_id.as_str(), r.date, r.value)),
        selection.variable,
    );
    let analysis = analyze(rows.iter().map(|r| (r.site_id.as_str(), r.value)), config);

    let trend_lines = selection
        .site_ids
        .iter()
        .map(|site_id| trend_line(site_id, analysis.sites.get(site_id)))
        .collect();

    Ok(DashboardView {
        figure,
        trend_lines,
        summary: analysis.summary.to_string(),
    })
}

/// `Site: <id>, trend: <direction>` plus the test statistics when available.
pub fn trend_line(site_id: &str, site: Option<&SiteTrend>) -> String {
    match site {
        Some(site) => match &site.result {
            Some(mk) => format!(
                "Site: {}, trend: {} ({}, p = {:.4}, tau = {:.3}, Sen's slope = {:.4})",
                site_id,
                site.direction(),
                mk.trend,
                mk.p,
                mk.tau,
                mk.slope
            ),
            None => format!("Site: {}, trend: {}", site_id, site.direction()),
        },
        None => format!("Site: {}, trend: insufficient data", site_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwl_core::Variable;

    const CSV: &str = "\
ostan,UTM,gregorian_date,sath_ab_jadid,taraz,sath-ab
A,S1,2020-01-01,1,100,10
A,S1,2020-02-01,2,101,9
A,S1,2020-03-01,3,102,8
A,S1,2020-04-01,4,103,7
A,S1,2020-05-01,5,104,6
A,S1,2020-06-01,6,105,5
A,S2,2020-01-01,2,100,
A,S2,2020-02-01,3,100,
A,S2,2020-03-01,4,100,
A,S2,2020-04-01,5,100,
A,S2,2020-05-01,6,100,
A,S2,2020-06-01,7,100,
A,S3,2020-01-01,10,50,1
A,S3,2020-02-01,11,50,1
A,S3,2020-03-01,12,50,1
A,S3,2020-04-01,13,50,1
A,S3,2020-05-01,14,50,1
A,S3,2020-06-01,15,50,1
B,T1,2020-01-01,5,1,1
B,T1,2020-02-01,4,1,1
";

    fn db() -> Database {
        let db = Database::new().unwrap();
        db.load_observations(CSV).unwrap();
        db
    }

    fn selection(regions: &[&str], sites: &[&str], variable: Variable) -> FilterSelection {
        FilterSelection::new(
            regions.iter().map(|s| s.to_string()),
            sites.iter().map(|s| s.to_string()),
            variable,
        )
    }

    #[test]
    fn no_region_gives_placeholders() {
        let view = update_dashboard(&db(), &selection(&[], &["S1"], Variable::default()), &TrendConfig::default())
            .unwrap();
        assert_eq!(view, DashboardView::placeholder(NO_REGION_TITLE));
        assert!(view.figure.is_placeholder());
        assert_eq!(view.summary, "No region selected");
    }

    #[test]
    fn no_rows_gives_no_data_placeholders() {
        let view = update_dashboard(&db(), &selection(&["A"], &["T1"], Variable::default()), &TrendConfig::default())
            .unwrap();
        assert_eq!(view, DashboardView::placeholder(NO_DATA_TITLE));

        let view = update_dashboard(&db(), &selection(&["Nowhere"], &[], Variable::default()), &TrendConfig::default())
            .unwrap();
        assert_eq!(view.summary, "No data available");
    }

    #[test]
    fn three_rising_sites_are_all_significant() {
        let view = update_dashboard(&db(), &selection(&["A"], &[], Variable::WaterLevelNew), &TrendConfig::default())
            .unwrap();
        assert_eq!(view.figure.series.len(), 3);
        assert_eq!(view.figure.title, "Trend of water_level_new by region and site");
        assert!(view.trend_lines.is_empty());
        assert_eq!(
            view.summary,
            "Total sites: 3, significant trend: 3, no trend: 0, ratio (trend:no trend): inf"
        );
    }

    #[test]
    fn selected_sites_get_direction_lines() {
        let view = update_dashboard(
            &db(),
            &selection(&["A"], &["S1", "S3"], Variable::WaterLevel),
            &TrendConfig::default(),
        )
        .unwrap();
        assert_eq!(view.figure.series.len(), 2);
        assert_eq!(view.trend_lines.len(), 2);
        assert!(view.trend_lines[0].starts_with("Site: S1, trend: downward (decreasing, p = "));
        // constant series: z = 0 is not upward
        assert!(view.trend_lines[1].starts_with("Site: S3, trend: downward (no trend, p = 1.0000"));
        assert!(view.summary.starts_with("Total sites: 2, significant trend: 1, no trend: 1"));
    }

    #[test]
    fn null_values_are_gaps_not_points() {
        let view = update_dashboard(&db(), &selection(&["A"], &["S2"], Variable::WaterLevel), &TrendConfig::default())
            .unwrap();
        assert_eq!(view.figure.series[0].points.len(), 6);
        assert!(view.figure.series[0].points.iter().all(|p| p.value.is_none()));
        assert_eq!(view.trend_lines, vec!["Site: S2, trend: insufficient data".to_string()]);
        assert!(view.summary.starts_with("Total sites: 1, significant trend: 0, no trend: 0"));
    }

    #[test]
    fn region_labels() {
        let db = db();
        let none: BTreeSet<String> = BTreeSet::new();
        assert_eq!(region_label(&db, &none).unwrap(), NO_SITE_SELECTED);

        let sites: BTreeSet<String> = ["T1", "S2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(region_label(&db, &sites).unwrap(), "A, B");

        let unknown: BTreeSet<String> = ["ZZ".to_string()].into_iter().collect();
        assert_eq!(region_label(&db, &unknown).unwrap(), NO_REGION_FOUND);
    }

    #[test]
    fn site_options_follow_regions() {
        let db = db();
        let regions: BTreeSet<String> = ["A".to_string()].into_iter().collect();
        assert_eq!(site_options(&db, &regions).unwrap(), vec!["S1", "S2", "S3"]);
        assert!(site_options(&db, &BTreeSet::new()).unwrap().is_empty());
    }
}
