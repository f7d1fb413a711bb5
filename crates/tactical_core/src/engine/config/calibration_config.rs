//! Compactness calibration
//!
//! Three reference hull areas (one per defensive block), the balance
//! penalty sensitivity and the two block boundaries. Missing keys in a
//! serialized config take the documented defaults.

use serde::{Deserialize, Serialize};

use crate::analysis::metrics::compactness::Block;
use crate::engine::physics_constants::compactness;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Reference area for a high press (m²)
    pub ref_area_high: f32,
    /// Reference area for a mid block (m²)
    pub ref_area_mid: f32,
    /// Reference area for a low block (m²)
    pub ref_area_low: f32,
    /// Balance penalty sensitivity
    pub sigma: f32,
    /// Low/mid boundary (fraction of length from own goal)
    pub boundary_low_mid: f32,
    /// Mid/high boundary (fraction of length from own goal)
    pub boundary_mid_high: f32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            ref_area_high: compactness::REF_AREA_HIGH_M2,
            ref_area_mid: compactness::REF_AREA_MID_M2,
            ref_area_low: compactness::REF_AREA_LOW_M2,
            sigma: compactness::BALANCE_SIGMA,
            boundary_low_mid: compactness::BOUNDARY_LOW_MID,
            boundary_mid_high: compactness::BOUNDARY_MID_HIGH,
        }
    }
}

impl CalibrationConfig {
    /// Build a validated calibration.
    pub fn new(
        ref_area_high: f32,
        ref_area_mid: f32,
        ref_area_low: f32,
        sigma: f32,
        boundary_low_mid: f32,
        boundary_mid_high: f32,
    ) -> Result<Self, ConfigError> {
        let cfg = Self {
            ref_area_high,
            ref_area_mid,
            ref_area_low,
            sigma,
            boundary_low_mid,
            boundary_mid_high,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ref_area_high", self.ref_area_high),
            ("ref_area_mid", self.ref_area_mid),
            ("ref_area_low", self.ref_area_low),
            ("sigma", self.sigma),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let ordered = self.boundary_low_mid > 0.0
            && self.boundary_low_mid < self.boundary_mid_high
            && self.boundary_mid_high < 1.0;
        if !ordered {
            return Err(ConfigError::BoundaryOrder {
                low_mid: self.boundary_low_mid,
                mid_high: self.boundary_mid_high,
            });
        }
        Ok(())
    }

    /// Reference area for a block. `Unknown` uses the mid-block area.
    pub fn reference_area(&self, block: Block) -> f32 {
        match block {
            Block::HighPress => self.ref_area_high,
            Block::MidBlock | Block::Unknown => self.ref_area_mid,
            Block::LowBlock => self.ref_area_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_values() {
        assert!(CalibrationConfig::new(600.0, 450.0, 300.0, 0.5, 0.35, 0.65).is_ok());
        assert_eq!(
            CalibrationConfig::new(600.0, 0.0, 300.0, 0.5, 0.35, 0.65),
            Err(ConfigError::NonPositive { name: "ref_area_mid", value: 0.0 })
        );
        assert!(matches!(
            CalibrationConfig::new(600.0, 450.0, 300.0, 0.5, 0.7, 0.65),
            Err(ConfigError::BoundaryOrder { .. })
        ));
        assert!(matches!(
            CalibrationConfig::new(600.0, 450.0, 300.0, 0.0, 0.35, 0.65),
            Err(ConfigError::NonPositive { name: "sigma", .. })
        ));
    }

    #[test]
    fn test_reference_area_by_block() {
        let cfg = CalibrationConfig::default();
        assert_eq!(cfg.reference_area(Block::LowBlock), 300.0);
        assert_eq!(cfg.reference_area(Block::MidBlock), 450.0);
        assert_eq!(cfg.reference_area(Block::HighPress), 600.0);
        assert_eq!(cfg.reference_area(Block::Unknown), 450.0);
    }
}
