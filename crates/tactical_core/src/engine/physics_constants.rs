//! Physical constants shared by the frame metrics.
//!
//! Coordinates are meters: x runs goal to goal (home goal at 0),
//! y runs touchline to touchline.

/// Pitch dimensions
pub mod field {
    /// Field length in meters
    pub const LENGTH_M: f32 = 105.0;
    /// Field width in meters
    pub const WIDTH_M: f32 = 68.0;
    /// Center X coordinate (meters)
    pub const CENTER_X: f32 = LENGTH_M * 0.5;
    /// Center Y coordinate (meters)
    pub const CENTER_Y: f32 = WIDTH_M * 0.5;
}

/// Player motion limits used by the velocity estimator
pub mod motion {
    /// Maximum realistic player speed (m/s)
    pub const MAX_SPEED_MPS: f32 = 13.0;
    /// EMA smoothing factor (higher = more responsive)
    pub const EMA_ALPHA: f32 = 0.3;
    /// Tracking feed frame rate
    pub const TRACKING_FPS: f32 = 29.97;
}

/// Time-to-intercept influence model
pub mod pitch_control {
    /// Seconds before a player can react
    pub const REACTION_TIME_S: f32 = 0.7;
    /// Sigmoid steepness for influence (lower = steeper)
    pub const INFLUENCE_SIGMA: f32 = 0.5;
    /// Grid spacing in meters
    pub const GRID_RESOLUTION_M: f32 = 2.0;
    /// Below this distance a player is already at the target
    pub const AT_TARGET_EPS_M: f32 = 0.1;
    /// Control value when no side exerts influence
    pub const NEUTRAL_CONTROL: f32 = 0.5;
}

/// Compactness calibration defaults
pub mod compactness {
    /// Reference hull area for a high press (m²)
    pub const REF_AREA_HIGH_M2: f32 = 600.0;
    /// Reference hull area for a mid block (m²)
    pub const REF_AREA_MID_M2: f32 = 450.0;
    /// Reference hull area for a low block (m²)
    pub const REF_AREA_LOW_M2: f32 = 300.0;
    /// Balance penalty sensitivity
    pub const BALANCE_SIGMA: f32 = 0.5;
    /// Low/mid boundary as a fraction of length from own goal
    pub const BOUNDARY_LOW_MID: f32 = 0.35;
    /// Mid/high boundary as a fraction of length from own goal
    pub const BOUNDARY_MID_HIGH: f32 = 0.65;
    /// Minimum points for a hull
    pub const MIN_HULL_POINTS: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_center() {
        assert!((field::CENTER_X - 52.5).abs() < f32::EPSILON);
        assert!((field::CENTER_Y - 34.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_block_boundaries_ordered() {
        assert!(compactness::BOUNDARY_LOW_MID < compactness::BOUNDARY_MID_HIGH);
        assert!(compactness::REF_AREA_LOW_M2 < compactness::REF_AREA_MID_M2);
        assert!(compactness::REF_AREA_MID_M2 < compactness::REF_AREA_HIGH_M2);
    }
}
