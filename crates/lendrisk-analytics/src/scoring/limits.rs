//! Limit/target scoring function.

use lendrisk_core::ScoringConfig;

/// Scores a raw metric into [0, 1] between two limits, with an optional
/// target for peak scoring.
///
/// # Arguments
///
/// * `value` - Raw metric value; NaN scores 0.0
/// * `upper_limit` - Upper boundary of the metric
/// * `lower_limit` - Lower boundary of the metric
/// * `reverse` - In linear mode, true means higher values score better.
///   Ignored when `target` is set.
/// * `target` - Optional peak-scoring target
///
/// # Returns
///
/// A score in [0, 1]. Total for finite inputs: limits given in the wrong
/// order, values far outside the range, and degenerate limit pairs all
/// clip to the boundary rather than panic.
#[must_use]
pub fn score_with_limits(
    value: f64,
    upper_limit: f64,
    lower_limit: f64,
    reverse: bool,
    target: Option<f64>,
) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    let score = if let Some(target) = target {
        // Peak scoring around the target; `reverse` is inert here.
        let distance = (value - target).abs();
        let max_distance = (upper_limit - target).abs().max((lower_limit - target).abs());
        1.0 - distance / max_distance
    } else if reverse {
        // Higher values get better scores
        if value >= upper_limit {
            1.0
        } else if value <= lower_limit {
            0.0
        } else {
            (value - lower_limit) / (upper_limit - lower_limit)
        }
    } else {
        // Lower values get better scores
        if value <= lower_limit {
            1.0
        } else if value >= upper_limit {
            0.0
        } else {
            (upper_limit - value) / (upper_limit - lower_limit)
        }
    };

    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Scores a value using a [`ScoringConfig`].
#[must_use]
pub fn score_with_config(value: f64, config: &ScoringConfig) -> f64 {
    score_with_limits(
        value,
        config.upper_limit,
        config.lower_limit,
        config.reverse,
        config.target,
    )
}

/// Rounds a value to the given number of decimal places.
#[must_use]
pub fn round_value(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
