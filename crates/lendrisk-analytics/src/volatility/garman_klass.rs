//! Garman-Klass annualized volatility.

use lendrisk_core::PriceBar;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default rolling window in bars.
pub const DEFAULT_VOLATILITY_WINDOW: usize = 30;

/// Default annualization factor (trading periods per year).
pub const DEFAULT_TRADING_PERIODS: f64 = 252.0;

/// Computes rolling Garman-Klass annualized volatility over an OHLC series.
///
/// Positions with no defined estimate carry `f64::NAN`:
///
/// - the first `window - 1` positions, where the window is not yet full;
/// - any position whose windowed mean range statistic is negative (the
///   square root of a negative number propagates as NaN rather than
///   panicking - callers must treat such a position as unscoreable, and
///   the bounded scorer maps NaN to 0.0).
///
/// With `clean == true` the leading undefined positions are dropped, so the
/// output has `input_len - window + 1` elements (empty if the input is
/// shorter than the window). With `clean == false` the output keeps one
/// element per input bar, NaN markers in place.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidWindow`] if `window` is zero.
pub fn garman_klass_volatility(
    bars: &[PriceBar],
    window: usize,
    trading_periods: f64,
    clean: bool,
) -> AnalyticsResult<Vec<f64>> {
    if window == 0 {
        return Err(AnalyticsError::InvalidWindow);
    }

    const TWO_LN_2_MINUS_1: f64 = 2.0 * std::f64::consts::LN_2 - 1.0;

    let rs: Vec<f64> = bars
        .iter()
        .map(|bar| {
            let log_hl = (bar.high / bar.low).ln();
            let log_co = (bar.close / bar.open).ln();
            0.5 * log_hl * log_hl - TWO_LN_2_MINUS_1 * log_co * log_co
        })
        .collect();

    let windowed = rs.windows(window).map(|w| {
        let mean = w.iter().sum::<f64>() / window as f64;
        (trading_periods * mean).sqrt()
    });

    let result = if clean {
        windowed.collect()
    } else {
        let mut out = vec![f64::NAN; window.saturating_sub(1).min(bars.len())];
        out.extend(windowed);
        out
    };

    Ok(result)
}

/// Latest defined-or-not volatility estimate for a series.
///
/// Returns NaN when the series is shorter than the window, so the value
/// can feed the bounded scorer directly.
pub fn latest_volatility(
    bars: &[PriceBar],
    window: usize,
    trading_periods: f64,
) -> AnalyticsResult<f64> {
    let series = garman_klass_volatility(bars, window, trading_periods, true)?;
    Ok(series.last().copied().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn bars(prices: &[(f64, f64, f64, f64)]) -> Vec<PriceBar> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &(o, h, l, c))| {
                let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    + chrono::Duration::days(i as i64);
                PriceBar::new(ts, o, h, l, c)
            })
            .collect()
    }

    fn flat_bars(n: usize) -> Vec<PriceBar> {
        bars(&vec![(100.0, 101.0, 99.0, 100.5); n])
    }

    #[test]
    fn test_clean_output_length() {
        let series = flat_bars(40);
        let vol = garman_klass_volatility(&series, 30, 252.0, true).unwrap();
        assert_eq!(vol.len(), 40 - 30 + 1);
        assert!(vol.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_unclean_output_length_and_leading_nans() {
        let series = flat_bars(40);
        let vol = garman_klass_volatility(&series, 30, 252.0, false).unwrap();
        assert_eq!(vol.len(), 40);
        assert!(vol[..29].iter().all(|v| v.is_nan()));
        assert!(vol[29..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_input_shorter_than_window() {
        let series = flat_bars(10);
        let clean = garman_klass_volatility(&series, 30, 252.0, true).unwrap();
        assert!(clean.is_empty());
        let marked = garman_klass_volatility(&series, 30, 252.0, false).unwrap();
        assert_eq!(marked.len(), 10);
        assert!(marked.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_zero_window_rejected() {
        let series = flat_bars(10);
        assert!(matches!(
            garman_klass_volatility(&series, 0, 252.0, true),
            Err(AnalyticsError::InvalidWindow)
        ));
    }

    #[test]
    fn test_single_bar_window_matches_formula() {
        let series = bars(&[(100.0, 110.0, 95.0, 104.0)]);
        let vol = garman_klass_volatility(&series, 1, 252.0, true).unwrap();

        let log_hl = (110.0f64 / 95.0).ln();
        let log_co = (104.0f64 / 100.0).ln();
        let rs = 0.5 * log_hl * log_hl - (2.0 * std::f64::consts::LN_2 - 1.0) * log_co * log_co;
        let expected = (252.0 * rs).sqrt();

        assert_relative_eq!(vol[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_invariance() {
        let series = bars(&[
            (100.0, 108.0, 97.0, 103.0),
            (103.0, 105.0, 99.0, 100.0),
            (100.0, 112.0, 100.0, 111.0),
            (111.0, 115.0, 104.0, 106.0),
            (106.0, 109.0, 101.0, 102.0),
        ]);
        let scaled: Vec<PriceBar> = series
            .iter()
            .map(|b| PriceBar::new(b.timestamp, b.open * 7.5, b.high * 7.5, b.low * 7.5, b.close * 7.5))
            .collect();

        let vol = garman_klass_volatility(&series, 3, 252.0, true).unwrap();
        let vol_scaled = garman_klass_volatility(&scaled, 3, 252.0, true).unwrap();

        for (a, b) in vol.iter().zip(vol_scaled.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_window_mean_propagates_nan() {
        // The range statistic only goes negative when the high/low range
        // understates the close/open move, i.e. on malformed bars that
        // escaped boundary validation. The estimator must mark the position
        // undefined, not panic.
        let series = bars(&vec![(100.0, 101.0, 99.9, 115.0); 3]);
        let vol = garman_klass_volatility(&series, 3, 252.0, true).unwrap();
        assert_eq!(vol.len(), 1);
        assert!(vol[0].is_nan());
    }

    #[test]
    fn test_latest_volatility() {
        let series = flat_bars(35);
        let latest = latest_volatility(&series, 30, 252.0).unwrap();
        assert!(latest.is_finite());

        let short = flat_bars(5);
        assert!(latest_volatility(&short, 30, 252.0).unwrap().is_nan());
    }
}
