//! Unified error types for the risk-scoring engine.
//!
//! Errors here are programming errors (bad parameters, malformed input that
//! escaped boundary validation). Expected data-sparsity conditions -
//! insufficient history, undefined metrics, degenerate distributions - are
//! not errors: scorers degrade to flagged zero-valued records instead.

use thiserror::Error;

/// Unified error type for all scoring operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Rolling window size of zero was requested.
    #[error("invalid rolling window: window must be at least 1")]
    InvalidWindow,

    /// Error bubbled up from core validation.
    #[error("core error: {0}")]
    Core(String),
}

/// Result type alias for scoring operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<lendrisk_core::CoreError> for AnalyticsError {
    fn from(err: lendrisk_core::CoreError) -> Self {
        AnalyticsError::Core(err.to_string())
    }
}
