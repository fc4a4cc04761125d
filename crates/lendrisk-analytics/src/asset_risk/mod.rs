//! Asset-level risk scoring.
//!
//! Combines three views of an asset's price behavior into one weighted
//! score:
//!
//! - **Volatility ratio**: is near-term volatility spiking relative to the
//!   long-term level?
//! - **Beta**: how strongly does the asset move with the reference market
//!   (correlation scaled by the volatility ratio)?
//! - **VaR**: how bad is the worst expected daily loss at 99% confidence?
//!
//! Each raw metric passes through the bounded scorer; sub-metrics with
//! insufficient history degrade to flagged zero records.

mod calculator;
pub mod stats;

pub use calculator::{
    AssetRiskCalculator, AssetRiskScore, BetaScore, VarScore, VolatilityRatioScore, BETA_VOL_WINDOW,
    BETA_WEIGHT, MIN_RETURN_OBSERVATIONS, VAR_WEIGHT, VOLATILITY_WEIGHT, VOL_RATIO_LONG_WINDOW,
    VOL_RATIO_SHORT_WINDOW,
};
