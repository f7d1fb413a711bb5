use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::motion;
use crate::error::ConfigError;

/// Velocity estimator settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    /// Speed cap applied after smoothing (m/s)
    pub max_speed: f32,
    /// EMA weight of the newest raw sample, in (0, 1]
    pub alpha: f32,
    /// Tracking frame rate; dt = 1 / fps
    pub fps: f32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            max_speed: motion::MAX_SPEED_MPS,
            alpha: motion::EMA_ALPHA,
            fps: motion::TRACKING_FPS,
        }
    }
}

impl VelocityConfig {
    pub fn dt(&self) -> f32 {
        1.0 / self.fps
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::NonPositive { name: "max_speed", value: self.max_speed });
        }
        if !(self.fps > 0.0) {
            return Err(ConfigError::NonPositive { name: "fps", value: self.fps });
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::OutOfRange { name: "alpha", range: "(0, 1]", value: self.alpha });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_from_fps() {
        let cfg = VelocityConfig { fps: 25.0, ..Default::default() };
        assert!((cfg.dt() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_range() {
        let ok = VelocityConfig { alpha: 1.0, ..Default::default() };
        assert!(ok.validate().is_ok());

        let zero = VelocityConfig { alpha: 0.0, ..Default::default() };
        assert!(zero.validate().is_err());

        let nan = VelocityConfig { alpha: f32::NAN, ..Default::default() };
        assert!(nan.validate().is_err());
    }
}
