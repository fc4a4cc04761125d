//! Domain types for DeFi lending risk scoring.
//!
//! This module provides the record types exchanged with upstream data
//! producers and downstream score consumers:
//!
//! - [`PriceBar`]: OHLC bar for one trading interval
//! - [`DebtEvent`]: sparse, irregular borrower debt observation
//! - [`DailyDebtRecord`]: one row of the reconstructed daily debt panel
//! - [`DailyConcentration`]: per-day HHI measurement
//! - [`ScoreResult`]: named metric -> value mapping emitted by scorers
//! - [`ScoringConfig`]: bounded-scoring limits and mode

mod concentration;
mod config;
mod debt;
mod price_bar;
mod score;

pub use concentration::DailyConcentration;
pub use config::ScoringConfig;
pub use debt::{DailyDebtRecord, DebtEvent};
pub use price_bar::{validate_series, PriceBar};
pub use score::{ScoreResult, INSUFFICIENT_DATA_KEY};
