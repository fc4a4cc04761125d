//! # Lendrisk Analytics
//!
//! Risk-scoring engine for DeFi lending positions.
//!
//! This crate implements the full scoring pipeline over typed series
//! supplied by upstream collaborators:
//!
//! - **Scoring**: bounded limit/target normalization of raw metrics into [0, 1]
//! - **Volatility**: rolling Garman-Klass annualized volatility from OHLC bars
//! - **Panel**: dense daily debt panel reconstruction from sparse events
//! - **Concentration**: daily HHI, relative and benchmark concentration scores
//! - **Asset Risk**: volatility ratio, beta, and VaR combined into one score
//!
//! ## Architecture
//!
//! `lendrisk-analytics` depends on `lendrisk-core` for record types, but
//! `lendrisk-core` does NOT depend on this crate. This separation keeps the
//! record types lightweight and calculation-free.
//!
//! The engine owns no I/O: it neither fetches data nor persists results,
//! and every computation is a pure, deterministic function of its inputs.
//! Data sparsity degrades to flagged zero-valued score records; only
//! malformed parameters are errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lendrisk_analytics::prelude::*;
//!
//! // Debt concentration
//! let panel = reconstruct_daily_panel(&events);
//! let concentration = BorrowerConcentration::new(&panel);
//! let relative = concentration.relative_hhi(7, 30);
//! let benchmark = concentration.benchmark_hhi();
//!
//! // Asset risk
//! let calc = AssetRiskCalculator::new(asset_bars, btc_bars, 252.0);
//! let breakdown = calc.final_score_breakdown()?;
//! println!("final score: {}", breakdown.final_score);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

// Re-export the error type
pub use error::{AnalyticsError, AnalyticsResult};

// ============================================================================
// MODULES
// ============================================================================

pub mod asset_risk;
pub mod concentration;
pub mod config;
pub mod panel;
pub mod scoring;
pub mod volatility;

mod parallel;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use lendrisk_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Scoring
    pub use crate::scoring::{round_value, score_with_config, score_with_limits};

    // Volatility
    pub use crate::volatility::{
        garman_klass_volatility, latest_volatility, DEFAULT_TRADING_PERIODS,
        DEFAULT_VOLATILITY_WINDOW,
    };

    // Panel
    pub use crate::panel::{reconstruct_daily_panel, reconstruct_daily_panel_with};

    // Concentration
    pub use crate::concentration::{
        daily_concentration, forward_fill_daily, hhi, BenchmarkHhi, BorrowerConcentration,
        RelativeHhi, DEFAULT_HISTORY_DAYS, DEFAULT_RECENT_DAYS,
    };

    // Asset risk
    pub use crate::asset_risk::{
        AssetRiskCalculator, AssetRiskScore, BetaScore, VarScore, VolatilityRatioScore,
        MIN_RETURN_OBSERVATIONS,
    };

    // Configuration
    pub use crate::config::AnalyticsConfig;

    // Core record types
    pub use lendrisk_core::{
        DailyConcentration, DailyDebtRecord, DebtEvent, PriceBar, ScoreResult, ScoringConfig,
    };
}
