//! # Team Shape Metrics Module
//!
//! Geometric summary of a team snapshot and goalkeeper inference.

use serde::Serialize;

use super::hull::{convex_hull, HullOutcome};
use crate::models::{EntityId, Position, Snapshot, TeamSide};

/// Team shape computed from player positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamShape {
    /// Maximum horizontal spread (y-axis) in meters
    pub width: f32,
    /// Maximum vertical spread (x-axis) in meters
    pub depth: f32,
    /// Team centroid in meters
    pub centroid: Position,
}

impl TeamShape {
    /// Width, depth and centroid. Empty input gives all zeros.
    pub fn from_points(points: &[Position]) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut sum_x, mut sum_y) = (0.0f32, 0.0f32);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            sum_x += p.x;
            sum_y += p.y;
        }

        let n = points.len() as f32;
        Self {
            width: max_y - min_y,
            depth: max_x - min_x,
            centroid: Position::new(sum_x / n, sum_y / n),
        }
    }
}

/// Shape plus hull of a team's outfield players, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfieldShape {
    pub goalkeeper: Option<EntityId>,
    pub shape: TeamShape,
    pub hull: HullOutcome,
}

/// The player closest to the side's own goal line.
pub fn identify_goalkeeper(positions: &Snapshot, side: TeamSide) -> Option<EntityId> {
    let goal_x = side.own_goal_x();
    positions
        .iter()
        .min_by(|a, b| (a.1.x - goal_x).abs().total_cmp(&(b.1.x - goal_x).abs()))
        .map(|(&id, _)| id)
}

/// All positions except the inferred goalkeeper.
pub fn outfield_positions(positions: &Snapshot, side: TeamSide) -> Snapshot {
    let gk = identify_goalkeeper(positions, side);
    positions
        .iter()
        .filter(|(id, _)| Some(**id) != gk)
        .map(|(&id, &p)| (id, p))
        .collect()
}

/// Outfield shape and hull for one team.
pub fn outfield_shape(positions: &Snapshot, side: TeamSide) -> OutfieldShape {
    let outfield = outfield_positions(positions, side);
    let points: Vec<Position> = outfield.values().copied().collect();
    OutfieldShape {
        goalkeeper: identify_goalkeeper(positions, side),
        shape: TeamShape::from_points(&points),
        hull: convex_hull(&points),
    }
}
