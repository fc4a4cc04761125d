//! Configuration for analytics computation.

use serde::{Deserialize, Serialize};

/// Controls parallelism for computations that support it.
///
/// Parallelism never changes results: each output element is a pure
/// function of a fixed input slice, so sequential and parallel runs are
/// identical. The only cross-element dependency in the engine - the panel
/// reconstructor's carried-forward cursor - is per-entity, and entities are
/// independent of each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires the 'parallel' feature).
    pub parallel: bool,

    /// Minimum entity count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64, // Use parallel if >=64 entities
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_sequential() {
        let config = AnalyticsConfig::sequential();
        assert!(!config.parallel);
    }

    #[test]
    fn test_should_parallelize() {
        let config = AnalyticsConfig::new().with_threshold(10);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(5));
            assert!(config.should_parallelize(10));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(5));
            assert!(!config.should_parallelize(10));
        }
    }
}
