//! Serializable multi-line chart model.
//!
//! A [`Figure`] is what the browser's `renderLineChart` draws: one series
//! per site, x = date, y = the selected variable. A figure without series
//! is a placeholder and only its title is shown.

use chrono::NaiveDate;
use gwl_core::Variable;
use serde::Serialize;

/// Title of the placeholder chart when no region is picked.
pub const NO_REGION_TITLE: &str = "No region selected";

/// Title of the placeholder chart when the filter matches nothing.
pub const NO_DATA_TITLE: &str = "No data available";

/// X-axis label for every line chart.
pub const DATE_AXIS_LABEL: &str = "Gregorian date";

/// Visual template name understood by `line-chart.js`.
pub const DARK_TEMPLATE: &str = "dark";

/// Draw mode: connect points and mark each one.
pub const LINES_AND_MARKERS: &str = "lines+markers";

/// One (date, value) point; `None` values render as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// One line in the chart, keyed by site identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

/// A complete chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub template: String,
    pub mode: String,
    pub series: Vec<Series>,
}

impl Figure {
    /// An empty chart carrying only an explanatory title.
    pub fn placeholder(title: &str) -> Figure {
        Figure {
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            template: DARK_TEMPLATE.to_string(),
            mode: LINES_AND_MARKERS.to_string(),
            series: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.series.is_empty()
    }

    /// Build a multi-line chart from `(site_id, date, value)` rows.
    ///
    /// Rows of the same site are appended to that site's series in arrival
    /// order; series appear in order of first arrival.
    pub fn line_chart<'a, I>(rows: I, variable: Variable) -> Figure
    where
        I: IntoIterator<Item = (&'a str, NaiveDate, Option<f64>)>,
    {
        let mut series: Vec<Series> = Vec::new();
        for (site_id, date, value) in rows {
            let point = Point { date, value };
            match series.iter_mut().rev().find(|s| s.name == site_id) {
                Some(existing) => existing.points.push(point),
                None => series.push(Series {
                    name: site_id.to_string(),
                    points: vec![point],
                }),
            }
        }
        Figure {
            title: format!("Trend of {} by region and site", variable.key()),
            x_label: DATE_AXIS_LABEL.to_string(),
            y_label: variable.key().to_string(),
            template: DARK_TEMPLATE.to_string(),
            mode: LINES_AND_MARKERS.to_string(),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    #[test]
    fn placeholder_has_no_series() {
        let fig = Figure::placeholder(NO_REGION_TITLE);
        assert!(fig.is_placeholder());
        assert_eq!(fig.title, "No region selected");
    }

    #[test]
    fn line_chart_groups_by_site() {
        let rows = vec![
            ("A", day(1), Some(1.0)),
            ("A", day(2), None),
            ("A", day(3), Some(3.0)),
            ("B", day(1), Some(7.0)),
        ];
        let fig = Figure::line_chart(rows, Variable::ReducedLevel);
        assert!(!fig.is_placeholder());
        assert_eq!(fig.title, "Trend of reduced_level by region and site");
        assert_eq!(fig.y_label, "reduced_level");
        assert_eq!(fig.mode, "lines+markers");
        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].name, "A");
        assert_eq!(fig.series[0].points.len(), 3);
        assert_eq!(fig.series[0].points[1].value, None);
        assert_eq!(fig.series[1].points[0].value, Some(7.0));
    }

    #[test]
    fn figure_serializes_dates_and_gaps() {
        let fig = Figure::line_chart(vec![("A", day(5), None)], Variable::WaterLevel);
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["series"][0]["points"][0]["date"], "2021-01-05");
        assert!(json["series"][0]["points"][0]["value"].is_null());
        assert_eq!(json["template"], "dark");
    }
}
