//! Borrower concentration calculator.

use lendrisk_core::{DailyConcentration, DailyDebtRecord, DebtEvent, ScoreResult};
use serde::{Deserialize, Serialize};

use super::hhi::daily_concentration;
use crate::panel::reconstruct_daily_panel;
use crate::scoring::{round_value, score_with_limits};

/// Upper limit for HHI ratio scoring.
pub const HHI_SCORE_UPPER: f64 = 1.1;
/// Lower limit for HHI ratio scoring.
pub const HHI_SCORE_LOWER: f64 = 0.9;
/// Peak-scoring target for HHI ratio scoring.
///
/// The scoring constants bind this as the `target` of the bounded scorer
/// (peak scoring at a ratio of 1.06 within 0.9-1.1); see DESIGN.md for the
/// decision record behind that binding.
pub const HHI_SCORE_TARGET: f64 = 1.06;

/// Default recent-window length in calendar days.
pub const DEFAULT_RECENT_DAYS: usize = 7;
/// Default history-window length in calendar days.
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// Relative concentration: recent mean HHI against a longer history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeHhi {
    /// Recent-window length in calendar days.
    pub recent_days: usize,
    /// History-window length in calendar days.
    pub history_days: usize,
    /// Mean HHI over the last `recent_days` calendar days.
    pub recent_hhi: f64,
    /// Mean HHI over the last `history_days` calendar days.
    pub history_hhi: f64,
    /// `recent_hhi / history_hhi`, rounded to 4 decimals.
    pub ratio: f64,
    /// Bounded score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    /// True when the daily series was empty and the record degraded to zero.
    pub insufficient_data: bool,
}

impl RelativeHhi {
    /// Converts into the generic metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new()
            .with_metric("recent_hhi", self.recent_hhi)
            .with_metric("history_hhi", self.history_hhi)
            .with_metric("hhi_ratio", self.ratio)
            .with_metric("relative_score", self.score);
        if self.insufficient_data {
            result.mark_insufficient_data();
        }
        result
    }
}

/// Benchmark concentration: latest HHI against the even-distribution ideal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkHhi {
    /// Latest day's HHI.
    pub current_hhi: f64,
    /// Latest day's ideal HHI.
    pub hhi_ideal: f64,
    /// `current_hhi / hhi_ideal`, rounded to 4 decimals.
    pub ratio: f64,
    /// Bounded score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    /// True when the daily series was empty and the record degraded to zero.
    pub insufficient_data: bool,
}

impl BenchmarkHhi {
    /// Converts into the generic metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new()
            .with_metric("current_hhi", self.current_hhi)
            .with_metric("hhi_ideal", self.hhi_ideal)
            .with_metric("hhi_ratio", self.ratio)
            .with_metric("benchmark_score", self.score);
        if self.insufficient_data {
            result.mark_insufficient_data();
        }
        result
    }
}

/// Calculator for borrower concentration scores.
///
/// Holds the densified daily concentration series for its lifetime; both
/// scoring methods read from it without recomputation.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use lendrisk_core::DailyDebtRecord;
/// use lendrisk_analytics::concentration::BorrowerConcentration;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let panel = vec![
///     DailyDebtRecord::new("A", day, 50.0),
///     DailyDebtRecord::new("B", day, 150.0),
/// ];
/// let calc = BorrowerConcentration::new(&panel);
/// let benchmark = calc.benchmark_hhi();
/// assert_eq!(benchmark.ratio, 1.25);
/// ```
#[derive(Debug, Clone)]
pub struct BorrowerConcentration {
    daily_hhi: Vec<DailyConcentration>,
}

impl BorrowerConcentration {
    /// Builds the calculator from a reconstructed daily debt panel.
    #[must_use]
    pub fn new(panel: &[DailyDebtRecord]) -> Self {
        Self {
            daily_hhi: daily_concentration(panel),
        }
    }

    /// Builds the calculator straight from raw debt events, reconstructing
    /// the daily panel first.
    #[must_use]
    pub fn from_events(events: &[DebtEvent]) -> Self {
        Self::new(&reconstruct_daily_panel(events))
    }

    /// The densified daily concentration series.
    #[must_use]
    pub fn daily_hhi(&self) -> &[DailyConcentration] {
        &self.daily_hhi
    }

    /// Mean HHI over the trailing `days` calendar days.
    fn tail_mean_hhi(&self, days: usize) -> f64 {
        let tail_start = self.daily_hhi.len().saturating_sub(days);
        let tail = &self.daily_hhi[tail_start..];
        if tail.is_empty() {
            return f64::NAN;
        }
        tail.iter().map(|c| c.hhi).sum::<f64>() / tail.len() as f64
    }

    /// Scores recent concentration against a longer history window.
    ///
    /// `ratio = mean(hhi, recent) / mean(hhi, history)`, peak-scored at
    /// [`HHI_SCORE_TARGET`] within [`HHI_SCORE_LOWER`]..[`HHI_SCORE_UPPER`].
    #[must_use]
    pub fn relative_hhi(&self, recent_days: usize, history_days: usize) -> RelativeHhi {
        if self.daily_hhi.is_empty() {
            return RelativeHhi {
                recent_days,
                history_days,
                recent_hhi: 0.0,
                history_hhi: 0.0,
                ratio: 0.0,
                score: 0.0,
                insufficient_data: true,
            };
        }

        let recent_hhi = self.tail_mean_hhi(recent_days);
        let history_hhi = self.tail_mean_hhi(history_days);
        let ratio = recent_hhi / history_hhi;
        let score = score_with_limits(
            ratio,
            HHI_SCORE_UPPER,
            HHI_SCORE_LOWER,
            false,
            Some(HHI_SCORE_TARGET),
        );
        RelativeHhi {
            recent_days,
            history_days,
            recent_hhi,
            history_hhi,
            ratio: round_value(ratio, 4),
            score: round_value(score, 2),
            insufficient_data: false,
        }
    }

    /// [`Self::relative_hhi`] with the default 7/30-day windows.
    #[must_use]
    pub fn relative_hhi_default(&self) -> RelativeHhi {
        self.relative_hhi(DEFAULT_RECENT_DAYS, DEFAULT_HISTORY_DAYS)
    }

    /// Scores the most recent day's HHI against its even-distribution ideal.
    #[must_use]
    pub fn benchmark_hhi(&self) -> BenchmarkHhi {
        let Some(latest) = self.daily_hhi.last() else {
            return BenchmarkHhi {
                current_hhi: 0.0,
                hhi_ideal: 0.0,
                ratio: 0.0,
                score: 0.0,
                insufficient_data: true,
            };
        };

        let ratio = latest.hhi / latest.hhi_ideal;
        let score = score_with_limits(
            ratio,
            HHI_SCORE_UPPER,
            HHI_SCORE_LOWER,
            false,
            Some(HHI_SCORE_TARGET),
        );
        BenchmarkHhi {
            current_hhi: latest.hhi,
            hhi_ideal: latest.hhi_ideal,
            ratio: round_value(ratio, 4),
            score: round_value(score, 2),
            insufficient_data: false,
        }
    }
}
