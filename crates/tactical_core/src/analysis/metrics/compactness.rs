//! # Compactness Index Module
//!
//! Scores how tightly a defending side's outfield shape matches a
//! block-appropriate reference area, penalised for width/depth imbalance.
//!
//! 1. Convex hull area `A` of the outfield positions
//! 2. Block from the centroid's distance to the own goal
//! 3. `raw = min(100, 100 * A_ref / A)`, 0 when `A = 0`
//! 4. `balance = exp(-ln(W/D)² / 2σ²)`
//! 5. `score = raw * balance`

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hull::convex_hull;
use super::shape::TeamShape;
use crate::engine::config::CalibrationConfig;
use crate::engine::physics_constants::{compactness::MIN_HULL_POINTS, field};
use crate::models::{Possession, Snapshot, TeamSide};

/// Coarse defensive posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    LowBlock,
    MidBlock,
    HighPress,
    Unknown,
}

impl Block {
    pub fn as_str(&self) -> &'static str {
        match self {
            Block::LowBlock => "low_block",
            Block::MidBlock => "mid_block",
            Block::HighPress => "high_press",
            Block::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compactness of one team in one frame. Fields are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompactnessResult {
    /// Final index (0-100)
    pub score: f32,
    /// Index before the balance penalty (0-100)
    pub raw_score: f32,
    pub block: Block,
    /// Convex hull area (m²)
    pub hull_area: f32,
    /// Lateral (y) spread (m)
    pub width: f32,
    /// Longitudinal (x) spread (m)
    pub depth: f32,
    /// Balance penalty factor (0-1)
    pub balance_factor: f32,
}

impl CompactnessResult {
    /// Result for fewer than three positions.
    pub const DEGENERATE: CompactnessResult = CompactnessResult {
        score: 0.0,
        raw_score: 0.0,
        block: Block::Unknown,
        hull_area: 0.0,
        width: 0.0,
        depth: 0.0,
        balance_factor: 0.0,
    };

    /// Copy rounded for display: one decimal, balance to three.
    pub fn rounded(&self) -> Self {
        Self {
            score: round_to(self.score, 1),
            raw_score: round_to(self.raw_score, 1),
            block: self.block,
            hull_area: round_to(self.hull_area, 1),
            width: round_to(self.width, 1),
            depth: round_to(self.depth, 1),
            balance_factor: round_to(self.balance_factor, 3),
        }
    }
}

fn round_to(v: f32, decimals: i32) -> f32 {
    let m = 10f32.powi(decimals);
    (v * m).round() / m
}

/// Classify the defensive block from the team centroid.
pub fn classify_block(centroid_x: f32, side: TeamSide, config: &CalibrationConfig) -> Block {
    let pct = match side {
        TeamSide::Home => centroid_x / field::LENGTH_M,
        TeamSide::Away => (field::LENGTH_M - centroid_x) / field::LENGTH_M,
    };

    if pct < config.boundary_low_mid {
        Block::LowBlock
    } else if pct < config.boundary_mid_high {
        Block::MidBlock
    } else {
        Block::HighPress
    }
}

/// Whether `side` is defending (and compactness applies).
///
/// Defending unless the side holds the ball in the opponent's half. A ball
/// exactly on the halfway line counts as the own half.
pub fn is_defending(possession: Possession, ball_x: f32, side: TeamSide) -> bool {
    if !possession.held_by(side) {
        return true;
    }

    match side {
        TeamSide::Home => ball_x <= field::CENTER_X,
        TeamSide::Away => ball_x >= field::CENTER_X,
    }
}

/// Log-normal penalty on the width/depth ratio, 1.0 at a 1:1 shape.
pub fn balance_factor(width: f32, depth: f32, sigma: f32) -> f32 {
    if !(width > 0.0 && depth > 0.0 && sigma > 0.0) {
        return 0.0;
    }
    let ln_r = (width / depth).ln();
    let b = (-(ln_r * ln_r) / (2.0 * sigma * sigma)).exp();
    if b.is_finite() {
        b
    } else {
        0.0
    }
}

/// Compactness Index for one team's outfield positions.
pub fn compute_ci(
    outfield_positions: &Snapshot,
    side: TeamSide,
    config: &CalibrationConfig,
) -> CompactnessResult {
    if outfield_positions.len() < MIN_HULL_POINTS {
        return CompactnessResult::DEGENERATE;
    }

    let points: Vec<_> = outfield_positions.values().copied().collect();
    let hull = convex_hull(&points);
    let area = hull.area();

    let shape = TeamShape::from_points(&points);
    let block = classify_block(shape.centroid.x, side, config);
    let ref_area = config.reference_area(block);

    let raw_score = if area > 0.0 {
        (100.0 * ref_area / area).min(100.0)
    } else {
        0.0
    };

    let balance = balance_factor(shape.width, shape.depth, config.sigma);

    CompactnessResult {
        score: raw_score * balance,
        raw_score,
        block,
        hull_area: area,
        width: shape.width,
        depth: shape.depth,
        balance_factor: balance,
    }
}
