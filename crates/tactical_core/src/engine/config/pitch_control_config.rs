use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::{field, motion, pitch_control};
use crate::error::ConfigError;

/// Time-to-intercept influence model settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchControlConfig {
    /// Seconds before a player starts moving toward a target
    pub reaction_time: f32,
    /// Top running speed used for travel time (m/s)
    pub max_speed: f32,
    /// Logistic steepness of the influence curve
    pub influence_sigma: f32,
    /// Grid spacing (m)
    pub resolution: f32,
    /// Pitch length covered by the grid (m)
    pub pitch_length: f32,
    /// Pitch width covered by the grid (m)
    pub pitch_width: f32,
}

impl Default for PitchControlConfig {
    fn default() -> Self {
        Self {
            reaction_time: pitch_control::REACTION_TIME_S,
            max_speed: motion::MAX_SPEED_MPS,
            influence_sigma: pitch_control::INFLUENCE_SIGMA,
            resolution: pitch_control::GRID_RESOLUTION_M,
            pitch_length: field::LENGTH_M,
            pitch_width: field::WIDTH_M,
        }
    }
}

impl PitchControlConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_speed", self.max_speed),
            ("influence_sigma", self.influence_sigma),
            ("resolution", self.resolution),
            ("pitch_length", self.pitch_length),
            ("pitch_width", self.pitch_width),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.reaction_time >= 0.0) {
            return Err(ConfigError::OutOfRange {
                name: "reaction_time",
                range: "[0, inf)",
                value: self.reaction_time,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_resolution_rejected() {
        let cfg = PitchControlConfig { resolution: 0.0, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive { name: "resolution", value: 0.0 })
        );
    }

    #[test]
    fn test_zero_reaction_time_allowed() {
        let cfg = PitchControlConfig { reaction_time: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }
}
