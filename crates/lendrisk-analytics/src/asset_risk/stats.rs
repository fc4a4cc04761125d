//! Return-series statistics.
//!
//! Small numeric helpers shared by the asset risk scorers. Undefined
//! results (empty input, zero variance) come back as NaN so they flow
//! through the bounded scorer's NaN-scores-zero rule instead of raising.

use chrono::NaiveDateTime;
use lendrisk_core::PriceBar;

/// Arithmetic mean; NaN for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple close-over-close returns, keyed by the later bar's timestamp.
///
/// `return_t = close_t / close_{t-1} - 1`; the first bar has no return.
#[must_use]
pub fn simple_returns(bars: &[PriceBar]) -> Vec<(NaiveDateTime, f64)> {
    bars.windows(2)
        .map(|pair| (pair[1].timestamp, pair[1].close / pair[0].close - 1.0))
        .collect()
}

/// Restricts two keyed return series to their common timestamps.
///
/// Both outputs are in ascending timestamp order and equal length.
#[must_use]
pub fn align_returns(
    a: &[(NaiveDateTime, f64)],
    b: &[(NaiveDateTime, f64)],
) -> (Vec<f64>, Vec<f64>) {
    let b_by_ts: std::collections::BTreeMap<NaiveDateTime, f64> = b.iter().copied().collect();

    let mut sorted_a: Vec<(NaiveDateTime, f64)> = a.to_vec();
    sorted_a.sort_by_key(|(ts, _)| *ts);

    let mut aligned_a = Vec::new();
    let mut aligned_b = Vec::new();
    for (ts, value) in sorted_a {
        if let Some(other) = b_by_ts.get(&ts) {
            aligned_a.push(value);
            aligned_b.push(*other);
        }
    }
    (aligned_a, aligned_b)
}

/// Pearson correlation coefficient.
///
/// NaN when fewer than two points or either series has zero variance.
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let x = &x[..n];
    let y = &y[..n];
    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    // 0/0 when either series is constant, which yields the NaN we want
    cov / (var_x * var_y).sqrt()
}

/// Percentile with linear interpolation between closest ranks.
///
/// `pct` is in [0, 100]. Matches the common numerical-library definition:
/// the rank is `pct/100 * (n - 1)` over the sorted values, interpolated
/// between its neighbors. NaN for an empty slice.
#[must_use]
pub fn percentile(values: &[f64], pct: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
