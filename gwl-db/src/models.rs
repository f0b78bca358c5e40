//! Query result model structs.

use chrono::NaiveDate;
use serde::Serialize;

/// A (site_id, date, value) triple for the multi-line chart and trend tests.
///
/// `value` is the selected variable and may be `None` when the reading is
/// missing; the chart draws a gap there and the trend test ignores it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteDateValue {
    pub site_id: String,
    pub date: NaiveDate,
    pub value: Option<f64>,
}
