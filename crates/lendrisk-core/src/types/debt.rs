//! Borrower debt observation types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An observed debt balance for one borrowing entity.
///
/// Events arrive as an irregular, unordered stream; several events per
/// entity per day are possible. The amount is the entity's full balance
/// at `timestamp`, not a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtEvent {
    /// Borrower identifier (typically an on-chain address).
    pub entity_id: String,
    /// Observation time.
    pub timestamp: NaiveDateTime,
    /// Observed debt balance, >= 0. Zero means the position closed.
    pub debt_amount: f64,
}

impl DebtEvent {
    /// Creates a new debt event.
    #[must_use]
    pub fn new(entity_id: impl Into<String>, timestamp: NaiveDateTime, debt_amount: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            timestamp,
            debt_amount,
        }
    }

    /// Calendar date of the observation.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Validates the event at the ingestion boundary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDebtEvent`] if the amount is negative
    /// or non-finite.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.debt_amount.is_finite() || self.debt_amount < 0.0 {
            return Err(CoreError::InvalidDebtEvent {
                entity_id: self.entity_id.clone(),
                reason: format!(
                    "debt_amount must be a non-negative finite number, got {}",
                    self.debt_amount
                ),
            });
        }
        Ok(())
    }
}

/// One row of the dense daily debt panel.
///
/// Exactly one record exists per (entity, date) pair in the reconstructed
/// panel; the amount is the entity's last known balance as of that date's
/// close. Zero-debt records are dropped at reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDebtRecord {
    /// Borrower identifier.
    pub entity_id: String,
    /// Panel date.
    pub date: NaiveDate,
    /// Last known debt balance as of this date, never zero.
    pub debt_amount: f64,
}

impl DailyDebtRecord {
    /// Creates a new daily debt record.
    #[must_use]
    pub fn new(entity_id: impl Into<String>, date: NaiveDate, debt_amount: f64) -> Self {
        Self {
            entity_id: entity_id.into(),
            date,
            debt_amount,
        }
    }
}
