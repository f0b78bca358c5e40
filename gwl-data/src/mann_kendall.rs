//! Mann-Kendall original test with Sen's slope.
//!
//! For a series `x` of length `n`:
//!
//! - `S = Σ_{k<j} sign(x_j - x_k)`
//! - `Var(S) = [n(n-1)(2n+5) - Σ_t t(t-1)(2t+5)] / 18`, `t` ranging over
//!   the sizes of groups of tied values
//! - `z = (S - 1)/√Var(S)` for `S > 0`, `0` for `S = 0`,
//!   `(S + 1)/√Var(S)` for `S < 0`
//! - two-sided `p = 2(1 - Φ(|z|))`
//! - Kendall's `τ = S / (n(n-1)/2)`
//! - Sen's slope is the median of all pairwise slopes
//!   `(x_j - x_i)/(j - i)`; the intercept is `median(x) - slope·(n-1)/2`.

use crate::stats::median;
use serde::Serialize;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;
use std::fmt;

/// Trend classification at the chosen significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    NoTrend,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::NoTrend => write!(f, "no trend"),
        }
    }
}

/// Result of one Mann-Kendall test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MannKendall {
    pub trend: Trend,
    /// True when `p < alpha`.
    pub significant: bool,
    pub p: f64,
    pub z: f64,
    pub tau: f64,
    pub s: f64,
    pub var_s: f64,
    /// Sen's slope, in value units per observation step.
    pub slope: f64,
    pub intercept: f64,
}

/// Run the test on `values` in sequence order.
///
/// Returns `None` for fewer than two values, where the statistic is
/// undefined. Callers drop missing readings before calling.
pub fn original_test(values: &[f64], alpha: f64) -> Option<MannKendall> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let s = s_statistic(values);
    let var_s = variance_s(values);
    let z = if s > 0.0 {
        (s - 1.0) / var_s.sqrt()
    } else if s < 0.0 {
        (s + 1.0) / var_s.sqrt()
    } else {
        0.0
    };
    let p = erfc(z.abs() / SQRT_2);
    let significant = p < alpha;
    let trend = match (significant, z > 0.0) {
        (true, true) => Trend::Increasing,
        (true, false) => Trend::Decreasing,
        (false, _) => Trend::NoTrend,
    };
    let pairs = (n * (n - 1)) as f64 / 2.0;
    let (slope, intercept) = sens_slope(values);

    Some(MannKendall {
        trend,
        significant,
        p,
        z,
        tau: s / pairs,
        s,
        var_s,
        slope,
        intercept,
    })
}

fn s_statistic(values: &[f64]) -> f64 {
    let mut s = 0i64;
    for (k, a) in values.iter().enumerate() {
        for b in &values[k + 1..] {
            s += match b.partial_cmp(a) {
                Some(std::cmp::Ordering::Greater) => 1,
                Some(std::cmp::Ordering::Less) => -1,
                _ => 0,
            };
        }
    }
    s as f64
}

fn variance_s(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut ties = 0.0;
    let mut run = 1usize;
    for i in 1..=sorted.len() {
        if i < sorted.len() && sorted[i] == sorted[i - 1] {
            run += 1;
            continue;
        }
        if run > 1 {
            let t = run as f64;
            ties += t * (t - 1.0) * (2.0 * t + 5.0);
        }
        run = 1;
    }

    (n * (n - 1.0) * (2.0 * n + 5.0) - ties) / 18.0
}

/// Sen's slope and intercept for a series indexed `0..n`.
pub fn sens_slope(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    let mut slopes = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            slopes.push((values[j] - values[i]) / (j - i) as f64);
        }
    }
    let slope = median(&slopes).unwrap_or(0.0);
    let center = n.saturating_sub(1) as f64 / 2.0;
    let intercept = median(values).map_or(0.0, |m| m - center * slope);
    (slope, intercept)
}
