//! Configuration for bounded metric scoring.

use serde::{Deserialize, Serialize};

/// Defines how a raw metric maps into a bounded [0, 1] score.
///
/// Two modes exist:
///
/// - **Linear** (`target` unset): interpolate between the limits, with the
///   direction controlled by `reverse` (false: lower values score better).
/// - **Peak** (`target` set): score 1.0 at the target, decaying linearly to
///   0 at whichever limit is farther from it. `reverse` has no effect in
///   this mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Upper boundary of the raw metric.
    pub upper_limit: f64,
    /// Lower boundary of the raw metric.
    pub lower_limit: f64,
    /// In linear mode, true means higher values score better.
    pub reverse: bool,
    /// Optional peak-scoring target.
    pub target: Option<f64>,
}

impl ScoringConfig {
    /// Creates a linear config with the given limits.
    #[must_use]
    pub fn new(upper_limit: f64, lower_limit: f64) -> Self {
        Self {
            upper_limit,
            lower_limit,
            reverse: false,
            target: None,
        }
    }

    /// Sets the linear-mode direction.
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Sets a peak-scoring target.
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }
}
