//! Error types for Lendrisk core.
//!
//! These errors only arise at the ingestion boundary: callers are expected
//! to validate upstream data once, before handing series to the analytics
//! layer. Data sparsity (short histories, missing days) is *not* an error
//! and is handled downstream by degradation to zero-valued scores.

use thiserror::Error;

/// A specialized Result type for Lendrisk core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for Lendrisk core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Invalid price bar (non-positive field or broken OHLC ordering).
    #[error("Invalid price bar at {timestamp}: {reason}")]
    InvalidPriceBar {
        /// Timestamp of the offending bar.
        timestamp: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid debt event (negative or non-finite amount).
    #[error("Invalid debt event for entity {entity_id}: {reason}")]
    InvalidDebtEvent {
        /// Entity the event belongs to.
        entity_id: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Series timestamps are not strictly increasing where required.
    #[error("Non-monotonic timestamps: bar {index} does not advance past its predecessor")]
    NonMonotonicTimestamps {
        /// Index of the first offending element.
        index: usize,
    },
}
