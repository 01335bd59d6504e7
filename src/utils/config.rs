//! Engine configuration
//!
//! Collaborator-facing settings only: location-request cadence and demo
//! options. The game constants (offset radius, win threshold, Earth
//! radius) are contract values and deliberately absent here.

use crate::api::SubscriptionSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File could not be read or written
    IoError { message: String },
    /// File contents could not be parsed or serialized
    SerializationError { message: String },
    /// A parameter value is outside its allowed range
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError { message } => write!(f, "config io error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "config serialization error: {}", message)
            }
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "invalid config parameter {} = {}: {}", parameter, value, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Engine configuration loaded from and saved to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cadence the collaborator requests from its location service
    pub subscription: SubscriptionSettings,
    /// Decimal places when rendering distances
    pub display_precision: usize,
    /// Log filter directive for the demo binary (e.g. "geowalk=debug")
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            subscription: SubscriptionSettings::default(),
            display_precision: 1,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("failed to read '{}': {}", path_str, e),
        })?;

        let config: EngineConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("failed to parse '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("failed to write '{}': {}", path_str, e),
        })
    }

    /// Check every parameter against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subscription.min_interval_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "subscription.min_interval_ms".to_string(),
                value: "0".to_string(),
                reason: "interval must be positive".to_string(),
            });
        }
        if !self.subscription.min_displacement_deg.is_finite()
            || self.subscription.min_displacement_deg < 0.0
        {
            return Err(ConfigError::InvalidParameter {
                parameter: "subscription.min_displacement_deg".to_string(),
                value: self.subscription.min_displacement_deg.to_string(),
                reason: "displacement must be finite and non-negative".to_string(),
            });
        }
        if self.display_precision > 8 {
            return Err(ConfigError::InvalidParameter {
                parameter: "display_precision".to_string(),
                value: self.display_precision.to_string(),
                reason: "more than 8 decimal places is meaningless for meters".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.subscription.min_interval_ms, 1000);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let mut config = EngineConfig::default();
        config.subscription.min_interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_negative_displacement_is_rejected() {
        let mut config = EngineConfig::default();
        config.subscription.min_displacement_deg = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = env::temp_dir().join("geowalk_config_roundtrip.json");

        let mut config = EngineConfig::default();
        config.display_precision = 2;
        config.log_filter = "geowalk=debug".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::from_file("/nonexistent/geowalk.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_garbage_file_is_serialization_error() {
        let path = env::temp_dir().join("geowalk_config_garbage.json");
        fs::write(&path, "not json at all").unwrap();

        let err = EngineConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SerializationError { .. }));

        fs::remove_file(&path).ok();
    }
}
