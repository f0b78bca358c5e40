//! Per-site trend analysis and the region-level significance summary.
//!
//! Every site group in the filtered rows is tested once. The summary counts
//! only groups with at least `min_points` valid readings; direction labels
//! for explicitly selected sites reuse the same per-site results.

use crate::mann_kendall::{original_test, MannKendall};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Minimum non-null readings for a site to enter the summary.
pub const MIN_POINTS: usize = 5;

/// Significance level for the two-sided test.
pub const ALPHA: f64 = 0.05;

/// Tunables for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, serde::Deserialize)]
pub struct TrendConfig {
    pub min_points: usize,
    pub alpha: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_points: MIN_POINTS,
            alpha: ALPHA,
        }
    }
}

/// Direction label for one selected site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// z > 0
    Upward,
    /// z <= 0
    Downward,
    /// Fewer than two readings; no statistic exists.
    Insufficient,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Upward => write!(f, "upward"),
            Direction::Downward => write!(f, "downward"),
            Direction::Insufficient => write!(f, "insufficient data"),
        }
    }
}

/// Test outcome for a single site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteTrend {
    pub site_id: String,
    /// Number of non-null readings tested.
    pub points: usize,
    pub result: Option<MannKendall>,
}

impl SiteTrend {
    pub fn direction(&self) -> Direction {
        match &self.result {
            Some(mk) if mk.z > 0.0 => Direction::Upward,
            Some(_) => Direction::Downward,
            None => Direction::Insufficient,
        }
    }
}

/// Ratio of significant to non-significant sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Finite(f64),
    /// No non-significant sites to divide by.
    Infinite,
}

impl Ratio {
    pub fn of(significant: usize, non_significant: usize) -> Ratio {
        if non_significant == 0 {
            Ratio::Infinite
        } else {
            Ratio::Finite(significant as f64 / non_significant as f64)
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Finite(v) => write!(f, "{v:.2}"),
            Ratio::Infinite => write!(f, "inf"),
        }
    }
}

/// JSON has no infinity; the unbounded ratio goes out as the string `"inf"`.
impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Finite(v) => serializer.serialize_f64(*v),
            Ratio::Infinite => serializer.serialize_str("inf"),
        }
    }
}

/// Counts of significant vs. non-significant sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Every site group in the filtered rows, tested or not.
    pub total_sites: usize,
    pub significant: usize,
    pub non_significant: usize,
    pub ratio: Ratio,
}

impl fmt::Display for TrendSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total sites: {}, significant trend: {}, no trend: {}, ratio (trend:no trend): {}",
            self.total_sites, self.significant, self.non_significant, self.ratio
        )
    }
}

/// Per-site results plus the summary over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub sites: BTreeMap<String, SiteTrend>,
    pub summary: TrendSummary,
}

impl TrendAnalysis {
    /// Direction for `site_id`; sites absent from the rows are insufficient.
    pub fn direction_of(&self, site_id: &str) -> Direction {
        self.sites
            .get(site_id)
            .map_or(Direction::Insufficient, SiteTrend::direction)
    }
}

/// Group `(site_id, value)` rows by site and test each group.
///
/// Rows must arrive in sequence order within each site (the filter query
/// orders by date). `None` values are dropped before testing.
pub fn analyze<'a, I>(rows: I, config: &TrendConfig) -> TrendAnalysis
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (site_id, value) in rows {
        if !groups.contains_key(site_id) {
            groups.insert(site_id.to_string(), Vec::new());
        }
        if let (Some(series), Some(v)) = (groups.get_mut(site_id), value) {
            series.push(v);
        }
    }

    let sites: BTreeMap<String, SiteTrend> = groups
        .into_iter()
        .map(|(site_id, values)| {
            let trend = SiteTrend {
                site_id: site_id.clone(),
                points: values.len(),
                result: original_test(&values, config.alpha),
            };
            (site_id, trend)
        })
        .collect();

    let summary = summarize(&sites, config);
    log::debug!("trend: {}", summary);
    TrendAnalysis { sites, summary }
}

/// Count significant and non-significant sites among those with enough data.
pub fn summarize(sites: &BTreeMap<String, SiteTrend>, config: &TrendConfig) -> TrendSummary {
    let mut significant = 0;
    let mut non_significant = 0;
    for site in sites.values() {
        if site.points < config.min_points {
            continue;
        }
        match &site.result {
            Some(mk) if mk.p < config.alpha => significant += 1,
            _ => non_significant += 1,
        }
    }
    TrendSummary {
        total_sites: sites.len(),
        significant,
        non_significant,
        ratio: Ratio::of(significant, non_significant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(series: &[(&'static str, &[Option<f64>])]) -> Vec<(&'static str, Option<f64>)> {
        series
            .iter()
            .flat_map(|(site, values)| values.iter().map(move |v| (*site, *v)))
            .collect()
    }

    const RISING: &[Option<f64>] = &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0), Some(6.0)];

    #[test]
    fn three_monotonic_sites_all_significant() {
        let data = rows(&[("S1", RISING), ("S2", RISING), ("S3", RISING)]);
        let analysis = analyze(data, &TrendConfig::default());
        assert_eq!(analysis.summary.total_sites, 3);
        assert_eq!(analysis.summary.significant, 3);
        assert_eq!(analysis.summary.non_significant, 0);
        assert_eq!(analysis.summary.ratio, Ratio::Infinite);
        assert_eq!(analysis.direction_of("S2"), Direction::Upward);
    }

    #[test]
    fn short_groups_count_toward_total_only() {
        let short: &[Option<f64>] = &[Some(3.0), Some(2.0), None, Some(1.0), None, None];
        let flat: &[Option<f64>] = &[Some(1.0), Some(3.0), Some(1.0), Some(3.0), Some(1.0), Some(3.0)];
        let data = rows(&[("A", RISING), ("B", short), ("C", flat)]);
        let analysis = analyze(data, &TrendConfig::default());

        let summary = analysis.summary;
        assert_eq!(summary.total_sites, 3);
        assert_eq!(summary.significant, 1);
        assert_eq!(summary.non_significant, 1);
        assert!(summary.significant + summary.non_significant <= 2);
        assert_eq!(summary.ratio, Ratio::Finite(1.0));

        // B is skipped from the summary but still gets a direction label
        assert_eq!(analysis.sites["B"].points, 3);
        assert_eq!(analysis.direction_of("B"), Direction::Downward);
    }

    #[test]
    fn directions() {
        let falling: &[Option<f64>] = &[Some(9.0), Some(7.0), Some(5.0)];
        let single: &[Option<f64>] = &[Some(9.0), None];
        let data = rows(&[("down", falling), ("one", single)]);
        let analysis = analyze(data, &TrendConfig::default());
        assert_eq!(analysis.direction_of("down"), Direction::Downward);
        assert_eq!(analysis.direction_of("one"), Direction::Insufficient);
        assert_eq!(analysis.direction_of("missing"), Direction::Insufficient);
    }

    #[test]
    fn empty_rows() {
        let analysis = analyze(Vec::<(&str, Option<f64>)>::new(), &TrendConfig::default());
        assert_eq!(analysis.summary.total_sites, 0);
        assert_eq!(analysis.summary.ratio, Ratio::Infinite);
    }

    #[test]
    fn ratio_display_and_json() {
        assert_eq!(Ratio::of(3, 0).to_string(), "inf");
        assert_eq!(Ratio::of(0, 0), Ratio::Infinite);
        assert_eq!(Ratio::of(2, 3).to_string(), "0.67");
        assert_eq!(serde_json::to_string(&Ratio::Infinite).unwrap(), "\"inf\"");
        assert_eq!(serde_json::to_string(&Ratio::of(1, 2)).unwrap(), "0.5");
    }

    #[test]
    fn summary_display() {
        let summary = TrendSummary {
            total_sites: 4,
            significant: 3,
            non_significant: 1,
            ratio: Ratio::of(3, 1),
        };
        assert_eq!(
            summary.to_string(),
            "Total sites: 4, significant trend: 3, no trend: 1, ratio (trend:no trend): 3.00"
        );
    }

    #[test]
    fn config_threshold_is_respected() {
        let data = rows(&[("A", RISING)]);
        let strict = TrendConfig { min_points: 10, alpha: ALPHA };
        let analysis = analyze(data, &strict);
        assert_eq!(analysis.summary.significant, 0);
        assert_eq!(analysis.summary.non_significant, 0);
        assert_eq!(analysis.summary.total_sites, 1);
    }
}
