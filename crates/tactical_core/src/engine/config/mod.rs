//! # Engine Configuration Module
//!
//! Every tunable of the frame metrics lives here as an immutable value
//! passed into each call. Nothing in the engine reads ambient state.
//!
//! ## Usage
//! ```rust
//! use tactical_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `TACTICAL_CONFIG`: path to a JSON config file (missing keys fall back to defaults)

mod calibration_config;
mod pitch_control_config;
mod velocity_config;

pub use calibration_config::CalibrationConfig;
pub use pitch_control_config::PitchControlConfig;
pub use velocity_config::VelocityConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Env var naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "TACTICAL_CONFIG";

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Velocity estimator settings
    pub velocity: VelocityConfig,
    /// Dominance field settings
    pub pitch_control: PitchControlConfig,
    /// Compactness calibration
    pub calibration: CalibrationConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.velocity.validate()?;
        self.pitch_control.validate()?;
        self.calibration.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON config. Absent keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `TACTICAL_CONFIG`, or use defaults.
    ///
    /// An unreadable or invalid file is reported and replaced by defaults.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => match Self::from_path(Path::new(&path)) {
                Ok(cfg) => {
                    info!(path = %path, "loaded engine config");
                    cfg
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "falling back to default engine config");
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.velocity.max_speed - 13.0).abs() < 1e-6);
        assert!((cfg.pitch_control.reaction_time - 0.7).abs() < 1e-6);
        assert!((cfg.calibration.ref_area_mid - 450.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"calibration": {"ref_area_mid": 900.0}}"#)
            .unwrap();
        assert!((cfg.calibration.ref_area_mid - 900.0).abs() < 1e-6);
        assert!((cfg.calibration.ref_area_high - 600.0).abs() < 1e-6);
        assert!((cfg.calibration.sigma - 0.5).abs() < 1e-6);
        assert_eq!(cfg.velocity, VelocityConfig::default());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = EngineConfig::from_json_str(r#"{"calibration": {"sigma": -1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { name: "sigma", .. }));

        let err = EngineConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn test_config_serialization() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = EngineConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = EngineConfig::from_path(Path::new("/nonexistent/tactical.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
