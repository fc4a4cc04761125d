//! OHLC price bar type.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single OHLC price bar for one trading interval.
///
/// Bars are expected to arrive ordered by timestamp, one per interval.
/// All four price fields must be positive, with `high` at least the largest
/// of the other three and `low` at most the smallest.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use lendrisk_core::types::PriceBar;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let bar = PriceBar::new(ts, 100.0, 104.0, 98.0, 102.0);
/// assert!(bar.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Start of the trading interval.
    pub timestamp: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl PriceBar {
    /// Creates a new price bar.
    #[must_use]
    pub fn new(timestamp: NaiveDateTime, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Validates the bar's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPriceBar`] if any field is non-positive
    /// or non-finite, or if the OHLC ordering is broken.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::InvalidPriceBar {
                    timestamp: self.timestamp.to_string(),
                    reason: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        if self.high < self.open.max(self.close).max(self.low) {
            return Err(CoreError::InvalidPriceBar {
                timestamp: self.timestamp.to_string(),
                reason: "high must be at least max(open, close, low)".to_string(),
            });
        }
        if self.low > self.open.min(self.close).min(self.high) {
            return Err(CoreError::InvalidPriceBar {
                timestamp: self.timestamp.to_string(),
                reason: "low must be at most min(open, close, high)".to_string(),
            });
        }
        Ok(())
    }
}

/// Validates an ordered OHLC series at the ingestion boundary.
///
/// Checks each bar individually and enforces strictly increasing
/// timestamps across the series.
///
/// # Errors
///
/// Returns the first [`CoreError`] encountered.
pub fn validate_series(bars: &[PriceBar]) -> CoreResult<()> {
    for bar in bars {
        bar.validate()?;
    }
    for (i, pair) in bars.windows(2).enumerate() {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(CoreError::NonMonotonicTimestamps { index: i + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_valid_bar() {
        let bar = PriceBar::new(ts(1, 0), 100.0, 105.0, 95.0, 101.0);
        assert!(bar.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let bar = PriceBar::new(ts(1, 0), -1.0, 105.0, 95.0, 101.0);
        assert!(bar.validate().is_err());
    }

    #[test]
    fn test_high_below_close_rejected() {
        let bar = PriceBar::new(ts(1, 0), 100.0, 100.5, 95.0, 101.0);
        assert!(bar.validate().is_err());
    }

    #[test]
    fn test_low_above_open_rejected() {
        let bar = PriceBar::new(ts(1, 0), 100.0, 105.0, 100.5, 101.0);
        assert!(bar.validate().is_err());
    }

    #[test]
    fn test_series_monotonicity() {
        let bars = vec![
            PriceBar::new(ts(1, 0), 100.0, 105.0, 95.0, 101.0),
            PriceBar::new(ts(1, 0), 101.0, 106.0, 96.0, 102.0),
        ];
        assert!(matches!(
            validate_series(&bars),
            Err(CoreError::NonMonotonicTimestamps { index: 1 })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let bar = PriceBar::new(ts(2, 12), 100.0, 105.0, 95.0, 101.0);
        let json = serde_json::to_string(&bar).unwrap();
        let parsed: PriceBar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bar);
    }
}
