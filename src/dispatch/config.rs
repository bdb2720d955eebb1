//! Dispatch configuration.

use crate::error::{DispatchError, Result};

/// Configuration for a dispatch run.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::DispatchConfig;
///
/// let config = DispatchConfig::default().with_progress_interval(500);
/// assert_eq!(config.progress_interval, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Emit a progress event every this many processed records.
    pub progress_interval: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1000,
        }
    }
}

impl DispatchConfig {
    /// Sets how many records pass between progress logs.
    pub fn with_progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(DispatchError::InvalidConfig(
                "progress_interval must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();
        assert_eq!(config.progress_interval, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = DispatchConfig::default().with_progress_interval(0);
        assert!(matches!(
            config.validate(),
            Err(DispatchError::InvalidConfig(_))
        ));
    }
}
