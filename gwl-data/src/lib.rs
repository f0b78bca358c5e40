//! Trend statistics for groundwater level series.
//!
//! This crate turns the per-site value series produced by the filter
//! queries into Mann-Kendall trend results and the significance summary
//! shown on the dashboard.

pub mod mann_kendall;
pub mod trend;

/// Small order statistics shared by the trend estimators.
pub mod stats {
    /// Median of a slice, `None` when empty.
    ///
    /// Even-length input averages the two middle values.
    pub fn median(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

}
