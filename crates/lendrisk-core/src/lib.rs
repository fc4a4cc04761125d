//! # Lendrisk Core
//!
//! Core types and validation for the Lendrisk DeFi risk-scoring engine.
//!
//! This crate provides the foundational building blocks used throughout
//! Lendrisk:
//!
//! - **Types**: `PriceBar`, `DebtEvent`, `DailyDebtRecord`,
//!   `DailyConcentration`, `ScoreResult`, `ScoringConfig`
//! - **Validation**: ingestion-boundary checks for malformed upstream data
//!
//! ## Design Philosophy
//!
//! - **Calculation-free**: record types carry no scoring logic; the
//!   analytics crate depends on this one, never the other way around
//! - **Validate once**: malformed input fails fast at the boundary, so the
//!   scoring layer can treat its inputs as trusted
//! - **Explicit degradation**: sparse data is not an error; scorers degrade
//!   to flagged zero records instead of raising
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lendrisk_core::prelude::*;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let event = DebtEvent::new("0xborrower", ts, 1_250.0);
//! event.validate()?;
//! # Ok::<(), lendrisk_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        validate_series, DailyConcentration, DailyDebtRecord, DebtEvent, PriceBar, ScoreResult,
        ScoringConfig, INSUFFICIENT_DATA_KEY,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{
    DailyConcentration, DailyDebtRecord, DebtEvent, PriceBar, ScoreResult, ScoringConfig,
};
