//! Asset risk calculator.

use lendrisk_core::{PriceBar, ScoreResult};
use serde::{Deserialize, Serialize};

use super::stats::{align_returns, pearson_correlation, percentile, simple_returns};
use crate::error::AnalyticsResult;
use crate::scoring::{round_value, score_with_limits};
use crate::volatility::latest_volatility;

/// Minimum aligned return observations for beta and VaR scoring.
pub const MIN_RETURN_OBSERVATIONS: usize = 30;

/// Short window for the volatility ratio, in bars.
pub const VOL_RATIO_SHORT_WINDOW: usize = 45;
/// Long window for the volatility ratio, in bars.
pub const VOL_RATIO_LONG_WINDOW: usize = 180;
/// Window for the volatilities feeding beta, in bars.
pub const BETA_VOL_WINDOW: usize = 45;

/// Composite weight of the volatility ratio score.
pub const VOLATILITY_WEIGHT: f64 = 0.3;
/// Composite weight of the beta score.
pub const BETA_WEIGHT: f64 = 0.3;
/// Composite weight of the VaR score.
pub const VAR_WEIGHT: f64 = 0.4;

/// Near-term vs. long-term volatility ratio score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityRatioScore {
    /// Short window length in bars.
    pub window1: usize,
    /// Long window length in bars.
    pub window2: usize,
    /// Latest short-window volatility, rounded to 2 decimals.
    pub short_volatility: f64,
    /// Latest long-window volatility, rounded to 2 decimals.
    pub long_volatility: f64,
    /// short / long, rounded to 2 decimals.
    pub ratio: f64,
    /// Bounded score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    /// True when either volatility was undefined (series shorter than the
    /// window) and the score degraded to zero.
    pub insufficient_data: bool,
}

impl VolatilityRatioScore {
    /// Converts into the generic metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new()
            .with_metric("short_volatility", self.short_volatility)
            .with_metric("long_volatility", self.long_volatility)
            .with_metric("volatility_ratio", self.ratio)
            .with_metric("volatility_score", self.score);
        if self.insufficient_data {
            result.mark_insufficient_data();
        }
        result
    }
}

/// Beta against the reference asset, correlation-scaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetaScore {
    /// Latest asset volatility at the beta window, rounded to 2 decimals.
    pub asset_volatility: f64,
    /// Latest reference volatility at the beta window, rounded to 2 decimals.
    pub reference_volatility: f64,
    /// Pearson correlation of aligned returns, rounded to 2 decimals.
    pub correlation: f64,
    /// `correlation * asset_vol / reference_vol`, rounded to 2 decimals.
    pub beta: f64,
    /// Bounded score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    /// True when history was insufficient or a component was undefined.
    pub insufficient_data: bool,
}

impl BetaScore {
    fn degraded() -> Self {
        Self {
            asset_volatility: 0.0,
            reference_volatility: 0.0,
            correlation: 0.0,
            beta: 0.0,
            score: 0.0,
            insufficient_data: true,
        }
    }

    /// Converts into the generic metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new()
            .with_metric("asset_volatility", self.asset_volatility)
            .with_metric("reference_volatility", self.reference_volatility)
            .with_metric("correlation", self.correlation)
            .with_metric("beta", self.beta)
            .with_metric("beta_score", self.score);
        if self.insufficient_data {
            result.mark_insufficient_data();
        }
        result
    }
}

/// 99% Value-at-Risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarScore {
    /// 1st percentile of daily returns (worst expected daily loss at 99%
    /// confidence, a negative number), rounded to 2 decimals.
    pub var_99: f64,
    /// Bounded score in [0, 1], rounded to 2 decimals.
    pub score: f64,
    /// True when fewer than the minimum observations were available.
    pub insufficient_data: bool,
}

impl VarScore {
    fn degraded() -> Self {
        Self {
            var_99: 0.0,
            score: 0.0,
            insufficient_data: true,
        }
    }

    /// Converts into the generic metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new()
            .with_metric("var_99", self.var_99)
            .with_metric("var_score", self.score);
        if self.insufficient_data {
            result.mark_insufficient_data();
        }
        result
    }
}

/// Full asset risk breakdown: all three sub-scores plus the composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRiskScore {
    /// Volatility ratio sub-score.
    pub volatility_ratio: VolatilityRatioScore,
    /// Beta sub-score.
    pub beta: BetaScore,
    /// VaR sub-score.
    pub var: VarScore,
    /// Weighted composite in [0, 1], rounded to 2 decimals.
    pub final_score: f64,
}

impl AssetRiskScore {
    /// Converts into one flat metric mapping.
    #[must_use]
    pub fn to_score_result(&self) -> ScoreResult {
        let mut result = ScoreResult::new();
        for source in [
            self.volatility_ratio.to_score_result(),
            self.beta.to_score_result(),
            self.var.to_score_result(),
        ] {
            for (name, value) in source.iter() {
                result.insert(name, value);
            }
        }
        result.insert("final_score", self.final_score);
        result
    }
}

/// Calculator combining volatility, beta, and VaR into one asset risk score.
///
/// Holds the asset and reference (benchmark, e.g. BTC) OHLC series,
/// immutable for the calculator's lifetime. Sub-metrics with insufficient
/// history degrade to flagged zero-valued records rather than raising, and
/// the composite still computes as a weighted sum over whatever is
/// available.
///
/// # Example
///
/// ```rust,ignore
/// let calc = AssetRiskCalculator::new(asset_bars, btc_bars, 252.0);
/// let breakdown = calc.final_score_breakdown()?;
/// println!("final: {}", breakdown.final_score);
/// ```
#[derive(Debug, Clone)]
pub struct AssetRiskCalculator {
    asset: Vec<PriceBar>,
    reference: Vec<PriceBar>,
    trading_periods: f64,
}

impl AssetRiskCalculator {
    /// Creates a calculator over the given series.
    ///
    /// `trading_periods` is the annualization factor (252 for daily bars).
    #[must_use]
    pub fn new(asset: Vec<PriceBar>, reference: Vec<PriceBar>, trading_periods: f64) -> Self {
        Self {
            asset,
            reference,
            trading_periods,
        }
    }

    /// Scores near-term volatility against long-term volatility.
    ///
    /// `ratio = vol(window1) / vol(window2)` over the latest estimates,
    /// linear-scored in (0.75, 1.5) - a near-term spike relative to the
    /// long-term level scores toward 0.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalyticsError::InvalidWindow`] if either window
    /// is zero.
    pub fn volatility_ratio_score(
        &self,
        window1: usize,
        window2: usize,
    ) -> AnalyticsResult<VolatilityRatioScore> {
        let short = latest_volatility(&self.asset, window1, self.trading_periods)?;
        let long = latest_volatility(&self.asset, window2, self.trading_periods)?;
        let ratio = short / long;
        let score = score_with_limits(ratio, 1.5, 0.75, false, None);
        let insufficient = short.is_nan() || long.is_nan();

        Ok(VolatilityRatioScore {
            window1,
            window2,
            short_volatility: nan_to_zero(round_value(short, 2)),
            long_volatility: nan_to_zero(round_value(long, 2)),
            ratio: nan_to_zero(round_value(ratio, 2)),
            score: round_value(score, 2),
            insufficient_data: insufficient,
        })
    }

    /// [`Self::volatility_ratio_score`] with the default 45/180 windows.
    pub fn volatility_ratio_score_default(&self) -> AnalyticsResult<VolatilityRatioScore> {
        self.volatility_ratio_score(VOL_RATIO_SHORT_WINDOW, VOL_RATIO_LONG_WINDOW)
    }

    /// Scores the asset's beta against the reference.
    ///
    /// `beta = correlation * asset_vol / reference_vol`, peak-scored at
    /// 1.75 within (0.5, 2.5). Degrades to a flagged zero record when
    /// fewer than [`MIN_RETURN_OBSERVATIONS`] aligned returns exist, the
    /// correlation is undefined, or either volatility is undefined (or the
    /// reference volatility is zero).
    pub fn beta_score(&self) -> AnalyticsResult<BetaScore> {
        let asset_returns = simple_returns(&self.asset);
        let reference_returns = simple_returns(&self.reference);
        let (aligned_asset, aligned_reference) = align_returns(&asset_returns, &reference_returns);

        if aligned_asset.len() < MIN_RETURN_OBSERVATIONS {
            return Ok(BetaScore::degraded());
        }

        let correlation = pearson_correlation(&aligned_asset, &aligned_reference);
        if correlation.is_nan() {
            return Ok(BetaScore::degraded());
        }

        let asset_vol = latest_volatility(&self.asset, BETA_VOL_WINDOW, self.trading_periods)?;
        let reference_vol =
            latest_volatility(&self.reference, BETA_VOL_WINDOW, self.trading_periods)?;
        if asset_vol.is_nan() || reference_vol.is_nan() || reference_vol == 0.0 {
            return Ok(BetaScore::degraded());
        }

        let beta = correlation * (asset_vol / reference_vol);
        let score = score_with_limits(beta, 2.5, 0.5, false, Some(1.75));

        Ok(BetaScore {
            asset_volatility: round_value(asset_vol, 2),
            reference_volatility: round_value(reference_vol, 2),
            correlation: round_value(correlation, 2),
            beta: round_value(beta, 2),
            score: round_value(score, 2),
            insufficient_data: false,
        })
    }

    /// Scores the asset's 99% Value-at-Risk.
    ///
    /// `var_99` is the 1st percentile of daily returns, peak-scored at
    /// -0.085 within (-0.01, -0.12). The `reverse` flag is inert in peak
    /// mode.
    #[must_use]
    pub fn var_score(&self) -> VarScore {
        let returns: Vec<f64> = simple_returns(&self.asset)
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        if returns.len() < MIN_RETURN_OBSERVATIONS {
            return VarScore::degraded();
        }

        let var_99 = percentile(&returns, 1.0);
        let score = score_with_limits(var_99, -0.01, -0.12, true, Some(-0.085));

        VarScore {
            var_99: round_value(var_99, 2),
            score: round_value(score, 2),
            insufficient_data: false,
        }
    }

    /// Weighted composite of the three sub-scores, rounded to 2 decimals.
    ///
    /// `0.3 * volatility + 0.3 * beta + 0.4 * var`; sub-metrics that
    /// degraded contribute their zero score, so partial unavailability
    /// never raises.
    pub fn final_score(&self) -> AnalyticsResult<f64> {
        Ok(self.final_score_breakdown()?.final_score)
    }

    /// Computes all three sub-scores and the weighted composite.
    pub fn final_score_breakdown(&self) -> AnalyticsResult<AssetRiskScore> {
        let volatility_ratio = self.volatility_ratio_score_default()?;
        let beta = self.beta_score()?;
        let var = self.var_score();

        let final_score = round_value(
            VOLATILITY_WEIGHT * volatility_ratio.score
                + BETA_WEIGHT * beta.score
                + VAR_WEIGHT * var.score,
            2,
        );

        Ok(AssetRiskScore {
            volatility_ratio,
            beta,
            var,
            final_score,
        })
    }
}

/// Degraded records report 0.0, not NaN, for undefined raw metrics.
fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(i: usize) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + chrono::Duration::days(i as i64)
    }

    /// Deterministic wavy price series with intrabar range.
    fn wavy_bars(n: usize, base: f64, amplitude: f64) -> Vec<PriceBar> {
        let mut bars = Vec::with_capacity(n);
        let mut prev_close = base;
        for i in 0..n {
            let close = base + amplitude * ((i as f64) * 0.7).sin();
            let open = prev_close;
            let high = open.max(close) * 1.01;
            let low = open.min(close) * 0.99;
            bars.push(PriceBar::new(ts(i), open, high, low, close));
            prev_close = close;
        }
        bars
    }

    #[test]
    fn test_volatility_ratio_score_in_bounds() {
        let asset = wavy_bars(200, 100.0, 5.0);
        let reference = wavy_bars(200, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let result = calc.volatility_ratio_score_default().unwrap();
        assert!(!result.insufficient_data);
        assert!((0.0..=1.0).contains(&result.score));
        assert!(result.short_volatility > 0.0);
        assert!(result.long_volatility > 0.0);
    }

    #[test]
    fn test_volatility_ratio_short_history_degrades() {
        let asset = wavy_bars(50, 100.0, 5.0);
        let reference = wavy_bars(50, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        // 50 bars < 180-bar long window: undefined long vol, zero score
        let result = calc.volatility_ratio_score_default().unwrap();
        assert!(result.insufficient_data);
        assert_eq!(result.score, 0.0);
        assert!(result.to_score_result().is_insufficient_data());
    }

    #[test]
    fn test_beta_of_identical_series_is_one() {
        let asset = wavy_bars(200, 100.0, 5.0);
        let calc = AssetRiskCalculator::new(asset.clone(), asset, 252.0);

        let result = calc.beta_score().unwrap();
        assert!(!result.insufficient_data);
        assert_relative_eq!(result.correlation, 1.0);
        assert_relative_eq!(result.beta, 1.0);
        // beta 1.0 vs target 1.75 in (2.5, 0.5): 1 - 0.75/1.25 = 0.4
        assert_relative_eq!(result.score, 0.4);
    }

    #[test]
    fn test_beta_insufficient_history() {
        let asset = wavy_bars(20, 100.0, 5.0);
        let reference = wavy_bars(20, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let result = calc.beta_score().unwrap();
        assert!(result.insufficient_data);
        assert_eq!(result.beta, 0.0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_beta_disjoint_timestamps_degrade() {
        let asset = wavy_bars(100, 100.0, 5.0);
        let mut reference = wavy_bars(100, 50.0, 2.0);
        for bar in &mut reference {
            bar.timestamp = bar.timestamp + chrono::Duration::hours(6);
        }
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let result = calc.beta_score().unwrap();
        assert!(result.insufficient_data);
    }

    #[test]
    fn test_beta_constant_asset_degrades() {
        // Constant closes give zero return variance: correlation undefined
        let asset = vec![
            PriceBar::new(ts(0), 100.0, 101.0, 99.0, 100.0);
            60
        ]
        .into_iter()
        .enumerate()
        .map(|(i, mut bar)| {
            bar.timestamp = ts(i);
            bar
        })
        .collect();
        let reference = wavy_bars(60, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let result = calc.beta_score().unwrap();
        assert!(result.insufficient_data);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_var_score_peaks_at_target() {
        // 101 returns whose second-smallest is -0.085: the 1st percentile
        // rank is (101 - 1) * 0.01 = 1 exactly, landing on the target.
        let mut rates = vec![-0.12, -0.085];
        rates.extend((0..99).map(|i| 0.0005 * f64::from(i)));
        let mut closes = vec![100.0];
        for r in rates {
            let last = *closes.last().unwrap();
            closes.push(last * (1.0 + r));
        }
        let bars: Vec<PriceBar> = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PriceBar::new(ts(i), c, c * 1.2, c * 0.8, c))
            .collect();
        let calc = AssetRiskCalculator::new(bars.clone(), bars, 252.0);

        let result = calc.var_score();
        assert!(!result.insufficient_data);
        assert_relative_eq!(result.score, 1.0);
    }

    #[test]
    fn test_var_insufficient_history() {
        let bars = wavy_bars(10, 100.0, 5.0);
        let calc = AssetRiskCalculator::new(bars.clone(), bars, 252.0);
        let result = calc.var_score();
        assert!(result.insufficient_data);
        assert_eq!(result.var_99, 0.0);
        assert!(result.to_score_result().is_insufficient_data());
    }

    #[test]
    fn test_final_score_weighting() {
        // 0.3 * 0.8 + 0.3 * 0.6 + 0.4 * 0.5 == 0.62
        let composite = round_value(
            VOLATILITY_WEIGHT * 0.8 + BETA_WEIGHT * 0.6 + VAR_WEIGHT * 0.5,
            2,
        );
        assert_relative_eq!(composite, 0.62);
    }

    #[test]
    fn test_final_score_breakdown_never_raises_on_sparse_data() {
        let asset = wavy_bars(5, 100.0, 5.0);
        let reference = wavy_bars(5, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let breakdown = calc.final_score_breakdown().unwrap();
        assert_eq!(breakdown.final_score, 0.0);
        assert!(breakdown.beta.insufficient_data);
        assert!(breakdown.var.insufficient_data);
    }

    #[test]
    fn test_breakdown_score_result_has_all_keys() {
        let asset = wavy_bars(200, 100.0, 5.0);
        let reference = wavy_bars(200, 50.0, 2.0);
        let calc = AssetRiskCalculator::new(asset, reference, 252.0);

        let result = calc.final_score_breakdown().unwrap().to_score_result();
        for key in [
            "volatility_score",
            "beta_score",
            "var_score",
            "final_score",
            "volatility_ratio",
            "beta",
            "var_99",
            "correlation",
        ] {
            assert!(result.get(key).is_some(), "missing {key}");
        }
    }
}
