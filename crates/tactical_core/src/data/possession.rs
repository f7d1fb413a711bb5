//! Nearest-player possession heuristic.

use crate::models::{Position, Possession, Snapshot, TeamSide};

/// Default control radius around the ball (m)
pub const CONTROL_RADIUS_M: f32 = 2.0;

/// The team of the player nearest the ball holds it if within `radius`.
pub fn infer_possession(
    home: &Snapshot,
    away: &Snapshot,
    ball: Option<Position>,
    radius: f32,
) -> Possession {
    let Some(ball) = ball else {
        return Possession::Contested;
    };

    let nearest = home
        .values()
        .map(|p| (TeamSide::Home, p.distance_to(ball)))
        .chain(away.values().map(|p| (TeamSide::Away, p.distance_to(ball))))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((side, dist)) if dist <= radius => side.into(),
        _ => Possession::Contested,
    }
}
