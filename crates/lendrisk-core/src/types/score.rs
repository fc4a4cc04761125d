//! Score result mapping emitted by every scorer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Marker key set on records produced from insufficient history.
///
/// Lets a downstream consumer tell a "confident low score" apart from a
/// "no-data zero" without changing the numeric shape of the record.
pub const INSUFFICIENT_DATA_KEY: &str = "insufficient_data";

/// A named metric -> value mapping emitted by a scorer.
///
/// Every result carries at least one final bounded score in [0, 1] under a
/// scorer-specific key. Keys are kept in sorted order for deterministic
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    metrics: BTreeMap<String, f64>,
}

impl ScoreResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a metric, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.metrics.insert(name.into(), value);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a metric by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Number of metrics in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Returns true if the record holds no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Iterates metrics in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Flags the record as produced from insufficient history.
    pub fn mark_insufficient_data(&mut self) {
        self.metrics.insert(INSUFFICIENT_DATA_KEY.to_string(), 1.0);
    }

    /// Returns true if the record was produced from insufficient history.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        self.get(INSUFFICIENT_DATA_KEY) == Some(1.0)
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for ScoreResult {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            metrics: iter.into_iter().collect(),
        }
    }
}
