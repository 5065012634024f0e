//! Subscription hints configuration.
//!
//! The two values here are power/precision hints passed opaquely to the
//! platform subscription call; the platform is free to honor them
//! loosely. They take effect when the broker next subscribes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use geofix_platform::UpdateHints;

/// Configuration for a [`PositionBroker`].
///
/// [`PositionBroker`]: crate::broker::PositionBroker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Minimum time interval between update callbacks, in milliseconds.
    /// Default: 10
    pub min_time_ms: u64,

    /// Minimum distance interval between update callbacks, in meters.
    /// Default: 10.0
    pub min_distance_m: f64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            min_time_ms: 10,
            min_distance_m: 10.0,
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid minimum distance: {0} (must be finite and non-negative)")]
    InvalidMinDistance(f64),
}

impl BrokerConfig {
    /// Create a new BrokerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every update the platform produces, regardless of movement.
    pub fn continuous() -> Self {
        Self {
            min_time_ms: 0,
            min_distance_m: 0.0,
        }
    }

    /// Sparse updates for battery-sensitive callers.
    pub fn power_saver() -> Self {
        Self {
            min_time_ms: 60_000,
            min_distance_m: 100.0,
        }
    }

    /// Set the minimum time hint.
    pub fn with_min_time_ms(mut self, min_time_ms: u64) -> Self {
        self.min_time_ms = min_time_ms;
        self
    }

    /// Set the minimum distance hint.
    pub fn with_min_distance_m(mut self, min_distance_m: f64) -> Self {
        self.min_distance_m = min_distance_m;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_distance_m.is_finite() || self.min_distance_m < 0.0 {
            return Err(ConfigError::InvalidMinDistance(self.min_distance_m));
        }
        Ok(())
    }

    /// The hints to hand the platform subscription call.
    pub fn hints(&self) -> UpdateHints {
        UpdateHints::new(self.min_time_ms, self.min_distance_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = BrokerConfig::default();
        assert_eq!(config.min_time_ms, 10);
        assert_eq!(config.min_distance_m, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_presets() {
        let continuous = BrokerConfig::continuous();
        assert_eq!(continuous.min_time_ms, 0);
        assert!(continuous.validate().is_ok());

        let saver = BrokerConfig::power_saver();
        assert_eq!(saver.min_distance_m, 100.0);
        assert!(saver.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BrokerConfig::new()
            .with_min_time_ms(2_000)
            .with_min_distance_m(25.0);
        assert_eq!(config.min_time_ms, 2_000);
        assert_eq!(config.min_distance_m, 25.0);
    }

    #[test]
    fn test_config_validation() {
        let negative = BrokerConfig::new().with_min_distance_m(-1.0);
        assert!(negative.validate().is_err());

        let non_finite = BrokerConfig::new().with_min_distance_m(f64::NAN);
        assert!(non_finite.validate().is_err());
    }

    #[test]
    fn test_hints_conversion() {
        let hints = BrokerConfig::new().with_min_time_ms(500).hints();
        assert_eq!(hints.min_time, Duration::from_millis(500));
        assert_eq!(hints.min_distance_m, 10.0);
    }
}
