//! Report sorting configuration.

use super::types::SortAlgorithm;
use crate::error::Result;

/// Configuration for building a sorted report.
///
/// # Examples
///
/// ```
/// use u_dispatch::sorting::{ReportConfig, SortAlgorithm};
///
/// let config = ReportConfig::default()
///     .with_algorithm(SortAlgorithm::Mergesort)
///     .with_limit(50);
/// assert_eq!(config.limit, Some(50));
///
/// assert!(ReportConfig::default().with_algorithm_name("shellsort").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Algorithm used to order report entries.
    pub algorithm: SortAlgorithm,
    /// Keep only the first `limit` entries (None keeps all).
    pub limit: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            algorithm: SortAlgorithm::Quicksort,
            limit: None,
        }
    }
}

impl ReportConfig {
    /// Sets the sorting algorithm.
    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Selects the algorithm by name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedAlgorithm`](crate::DispatchError::UnsupportedAlgorithm)
    /// for unknown names.
    pub fn with_algorithm_name(mut self, name: &str) -> Result<Self> {
        self.algorithm = name.parse()?;
        Ok(self)
    }

    /// Sets the maximum number of report entries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
