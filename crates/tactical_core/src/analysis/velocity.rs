//! # Velocity Estimation Module
//!
//! Frame-to-frame velocities with EMA smoothing and a physical speed cap.
//!
//! The caller owns the smoothed state: each tick takes the previous
//! smoothed map and returns a new one, which is threaded into the next
//! frame.
//!
//! ```text
//! raw      = estimate(current, previous, dt)
//! smoothed = smooth(raw, prev_smoothed, alpha)
//! out      = clamp(smoothed, max_speed)
//! ```

use crate::engine::config::VelocityConfig;
use crate::models::{Snapshot, Velocity, VelocityMap};

/// Raw single-frame velocities.
///
/// Entities new in `current` get a zero velocity; entities only in
/// `previous` are dropped.
pub fn estimate(current: &Snapshot, previous: &Snapshot, dt: f32) -> VelocityMap {
    current
        .iter()
        .map(|(&id, pos)| {
            let vel = match previous.get(&id) {
                Some(prev) if dt > 0.0 => {
                    Velocity::new((pos.x - prev.x) / dt, (pos.y - prev.y) / dt)
                }
                _ => Velocity::ZERO,
            };
            (id, vel)
        })
        .collect()
}

/// Exponential moving average over the previous smoothed state.
///
/// - present in both: `alpha * raw + (1 - alpha) * prev`
/// - new this tick: `raw`
/// - missing this tick: `(1 - alpha) * prev` (decays toward zero)
pub fn smooth(raw: &VelocityMap, prev_smoothed: &VelocityMap, alpha: f32) -> VelocityMap {
    let keep = 1.0 - alpha;
    let mut smoothed: VelocityMap = raw
        .iter()
        .map(|(&id, v)| {
            let out = match prev_smoothed.get(&id) {
                Some(prev) => Velocity::new(
                    alpha * v.vx + keep * prev.vx,
                    alpha * v.vy + keep * prev.vy,
                ),
                None => *v,
            };
            (id, out)
        })
        .collect();

    for (&id, prev) in prev_smoothed {
        smoothed.entry(id).or_insert_with(|| prev.scaled(keep));
    }

    smoothed
}

/// Scale any vector faster than `max_speed` down to exactly `max_speed`.
pub fn clamp(velocities: &VelocityMap, max_speed: f32) -> VelocityMap {
    velocities
        .iter()
        .map(|(&id, v)| (id, clamp_one(*v, max_speed)))
        .collect()
}

fn clamp_one(v: Velocity, max_speed: f32) -> Velocity {
    let speed = v.speed();
    if speed > max_speed {
        v.scaled(max_speed / speed)
    } else {
        v
    }
}

/// One full estimator tick for a team.
pub fn step(
    current: &Snapshot,
    previous: &Snapshot,
    prev_smoothed: &VelocityMap,
    config: &VelocityConfig,
) -> VelocityMap {
    let raw = estimate(current, previous, config.dt());
    let smoothed = smooth(&raw, prev_smoothed, config.alpha);
    clamp(&smoothed, config.max_speed)
}
