//! Tracking frame data model
//!
//! Positions are meters in the pitch frame (x: 0..105 goal to goal,
//! y: 0..68 touchline to touchline). The engine never clamps them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::physics_constants::field;

/// Stable tracking identifier. Not contiguous, unique within a team.
pub type EntityId = u32;

/// 2D point in pitch meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Velocity vector in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { vx: 0.0, vy: 0.0 };

    pub const fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            vx: self.vx * factor,
            vy: self.vy * factor,
        }
    }

    /// Heading in radians
    pub fn angle(&self) -> f32 {
        self.vy.atan2(self.vx)
    }
}

/// One team's positions for one frame.
pub type Snapshot = BTreeMap<EntityId, Position>;

/// One team's velocities for one frame.
pub type VelocityMap = BTreeMap<EntityId, Velocity>;

/// Which side of the pitch a team defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    /// Defends the goal at x = 0
    Home,
    /// Defends the goal at x = 105
    Away,
}

impl TeamSide {
    pub fn is_home(&self) -> bool {
        matches!(self, TeamSide::Home)
    }

    pub fn opponent(&self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// X coordinate of the goal line this side defends
    pub fn own_goal_x(&self) -> f32 {
        match self {
            TeamSide::Home => 0.0,
            TeamSide::Away => field::LENGTH_M,
        }
    }
}

/// Ball possession label supplied by the frame source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Possession {
    Home,
    Away,
    #[default]
    Contested,
}

impl Possession {
    pub fn held_by(&self, side: TeamSide) -> bool {
        matches!(
            (self, side),
            (Possession::Home, TeamSide::Home) | (Possession::Away, TeamSide::Away)
        )
    }
}

impl From<TeamSide> for Possession {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::Home => Possession::Home,
            TeamSide::Away => Possession::Away,
        }
    }
}

/// A single tracking frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_id: u64,
    #[serde(default)]
    pub home: Snapshot,
    #[serde(default)]
    pub away: Snapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball: Option<Position>,
    #[serde(default)]
    pub possession: Possession,
}

impl Frame {
    pub fn team(&self, side: TeamSide) -> &Snapshot {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Drop entries with non-finite coordinates (tracking dropouts).
    pub fn sanitized(mut self) -> Self {
        self.home.retain(|_, p| p.is_finite());
        self.away.retain(|_, p| p.is_finite());
        self.ball = self.ball.filter(Position::is_finite);
        self
    }
}

/// Per-team pair of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerTeam<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerTeam<T> {
    pub fn get(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possession_held_by() {
        assert!(Possession::Home.held_by(TeamSide::Home));
        assert!(!Possession::Home.held_by(TeamSide::Away));
        assert!(!Possession::Contested.held_by(TeamSide::Home));
        assert!(!Possession::Contested.held_by(TeamSide::Away));
    }

    #[test]
    fn test_sanitized_drops_nan() {
        let mut frame = Frame::default();
        frame.home.insert(1, Position::new(10.0, 20.0));
        frame.home.insert(2, Position::new(f32::NAN, 20.0));
        frame.ball = Some(Position::new(f32::INFINITY, 0.0));

        let frame = frame.sanitized();
        assert_eq!(frame.home.len(), 1);
        assert!(frame.ball.is_none());
    }

    #[test]
    fn test_frame_json_shape() {
        let json = r#"{
            "frame_id": 7,
            "home": {"1": {"x": 10.0, "y": 34.0}},
            "away": {"4": {"x": 90.0, "y": 30.0}},
            "ball": {"x": 52.5, "y": 34.0},
            "possession": "away"
        }"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.frame_id, 7);
        assert_eq!(frame.home[&1], Position::new(10.0, 34.0));
        assert_eq!(frame.possession, Possession::Away);
    }

    #[test]
    fn test_own_goal_x() {
        assert_eq!(TeamSide::Home.own_goal_x(), 0.0);
        assert_eq!(TeamSide::Away.own_goal_x(), 105.0);
    }
}
