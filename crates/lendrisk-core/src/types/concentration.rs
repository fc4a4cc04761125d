//! Daily concentration measurements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Herfindahl-Hirschman concentration for one calendar day.
///
/// `hhi` is the sum of squared debt amounts across borrowers on that day;
/// `hhi_ideal` is the HHI the same total debt would produce if split evenly
/// across the same number of borrowers. Both are zero on degenerate days
/// (no borrowers or zero total debt).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyConcentration {
    /// Calendar day.
    pub date: NaiveDate,
    /// Herfindahl-Hirschman index.
    pub hhi: f64,
    /// HHI of a perfectly even distribution with the same total and count.
    pub hhi_ideal: f64,
}

impl DailyConcentration {
    /// Creates a new daily concentration record.
    #[must_use]
    pub fn new(date: NaiveDate, hhi: f64, hhi_ideal: f64) -> Self {
        Self {
            date,
            hhi,
            hhi_ideal,
        }
    }

    /// Concentration relative to the even-distribution baseline.
    ///
    /// Returns `None` when the ideal is zero (degenerate day).
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        if self.hhi_ideal == 0.0 {
            None
        } else {
            Some(self.hhi / self.hhi_ideal)
        }
    }
}
