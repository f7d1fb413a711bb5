//! # Pitch Control Module
//!
//! Spatial dominance field from a time-to-intercept model with logistic
//! influence (Spearman-style, simplified).
//!
//! For each grid point `p` and player `e`:
//! - `t = reaction_time + max(0, |p - x_e| - s * reaction_time) / max_speed`
//!   where `s` is the velocity component toward `p`
//! - `influence = 1 / (1 + exp(t / sigma))`
//!
//! Control is `I_A / (I_A + I_B)`, or 0.5 when neither side has players.
//! `1.0` = side A owns the point, `0.0` = side B.
//!
//! Influences are summed in log space (f64), so far cells and steep curves
//! keep their ordering instead of underflowing to a neutral 0.5.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::config::PitchControlConfig;
use crate::engine::physics_constants::pitch_control::{AT_TARGET_EPS_M, NEUTRAL_CONTROL};
use crate::models::{Position, Snapshot, Velocity, VelocityMap};

/// Control values sampled on a regular lattice, row-major (row = y).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceGrid {
    /// Column coordinates (x, meters)
    pub xs: Vec<f32>,
    /// Row coordinates (y, meters)
    pub ys: Vec<f32>,
    /// `values[row * xs.len() + col]`
    pub values: Vec<f32>,
}

impl DominanceGrid {
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    pub fn cols(&self) -> usize {
        self.xs.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows() && col < self.cols() {
            self.values.get(row * self.cols() + col).copied()
        } else {
            None
        }
    }

    /// Value of the cell nearest to `(x, y)`.
    pub fn value_near(&self, x: f32, y: f32) -> Option<f32> {
        let col = nearest_index(&self.xs, x)?;
        let row = nearest_index(&self.ys, y)?;
        self.get(row, col)
    }

    /// Mean control over all cells (share of pitch owned by side A).
    pub fn mean(&self) -> f32 {
        if self.values.is_empty() {
            return NEUTRAL_CONTROL;
        }
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }
}

fn nearest_index(axis: &[f32], v: f32) -> Option<usize> {
    axis.iter()
        .enumerate()
        .min_by(|a, b| (a.1 - v).abs().total_cmp(&(b.1 - v).abs()))
        .map(|(i, _)| i)
}

/// Lattice coordinates `0, r, 2r, ...` covering `[0, extent]`.
///
/// The last point may overshoot `extent` when `r` does not divide it.
/// Empty when `extent` is negative or `resolution` is not positive.
pub fn axis_points(extent: f32, resolution: f32) -> Vec<f32> {
    if !(resolution > 0.0) || !(extent >= 0.0) || !(extent / resolution).is_finite() {
        return Vec::new();
    }
    let n = (extent / resolution).ceil() as usize;
    (0..=n).map(|i| i as f32 * resolution).collect()
}

/// Modeled time for a player to reach `target` (seconds).
pub fn time_to_intercept(
    player_pos: Position,
    player_vel: Velocity,
    target: Position,
    config: &PitchControlConfig,
) -> f32 {
    let dx = target.x - player_pos.x;
    let dy = target.y - player_pos.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance < AT_TARGET_EPS_M {
        return config.reaction_time;
    }

    // closing speed: velocity projected on the unit vector toward target
    let closing = (player_vel.vx * dx + player_vel.vy * dy) / distance;
    let adjusted = (distance - closing * config.reaction_time).max(0.0);

    config.reaction_time + adjusted / config.max_speed
}

/// Logistic influence, decreasing in `tti`, within [0, 1).
pub fn influence(tti: f32, sigma: f32) -> f32 {
    log_influence(tti, sigma).exp() as f32
}

/// `ln(1 / (1 + e^x))` with `x = tti / sigma`, without overflow.
fn log_influence(tti: f32, sigma: f32) -> f64 {
    let x = f64::from(tti) / f64::from(sigma);
    -(x.max(0.0) + (-x.abs()).exp().ln_1p())
}

/// `ln(sum(influence))` over one side, `None` for an empty side.
fn side_log_influence(target: Position, side: &[(Position, Velocity)], config: &PitchControlConfig) -> Option<f64> {
    let logs: Vec<f64> = side
        .iter()
        .map(|&(pos, vel)| log_influence(time_to_intercept(pos, vel, target, config), config.influence_sigma))
        .collect();
    if logs.is_empty() {
        return None;
    }
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(max + logs.iter().map(|l| (l - max).exp()).sum::<f64>().ln())
}

/// Control value at a single point.
pub fn control_at(
    target: Position,
    side_a: &[(Position, Velocity)],
    side_b: &[(Position, Velocity)],
    config: &PitchControlConfig,
) -> f32 {
    let a = side_log_influence(target, side_a, config);
    let b = side_log_influence(target, side_b, config);
    let control = match (a, b) {
        (None, None) => return NEUTRAL_CONTROL,
        (Some(_), None) => 1.0,
        (None, Some(_)) => 0.0,
        // I_A / (I_A + I_B) == 1 / (1 + e^(ln I_B - ln I_A))
        (Some(a), Some(b)) => 1.0 / (1.0 + (b - a).exp()),
    };
    if control.is_finite() {
        (control as f32).clamp(0.0, 1.0)
    } else {
        NEUTRAL_CONTROL
    }
}

/// Pair each position with its velocity (zero when unknown).
pub fn with_velocities(positions: &Snapshot, velocities: Option<&VelocityMap>) -> Vec<(Position, Velocity)> {
    positions
        .iter()
        .map(|(id, &pos)| {
            let vel = velocities
                .and_then(|v| v.get(id))
                .copied()
                .unwrap_or(Velocity::ZERO);
            (pos, vel)
        })
        .collect()
}

/// Dominance field over the whole pitch. Side A maps to 1.0.
pub fn control_grid(
    side_a_positions: &Snapshot,
    side_b_positions: &Snapshot,
    side_a_velocities: Option<&VelocityMap>,
    side_b_velocities: Option<&VelocityMap>,
    config: &PitchControlConfig,
) -> DominanceGrid {
    let side_a = with_velocities(side_a_positions, side_a_velocities);
    let side_b = with_velocities(side_b_positions, side_b_velocities);

    let xs = axis_points(config.pitch_length, config.resolution);
    let ys = axis_points(config.pitch_width, config.resolution);
    let cols = xs.len();
    if cols == 0 || ys.is_empty() {
        warn!(resolution = config.resolution, "unusable grid extent, returning empty dominance grid");
        return DominanceGrid { xs: Vec::new(), ys: Vec::new(), values: Vec::new() };
    }

    debug!(
        rows = ys.len(),
        cols,
        side_a = side_a.len(),
        side_b = side_b.len(),
        "computing dominance grid"
    );

    let mut values = vec![NEUTRAL_CONTROL; ys.len() * cols];
    values
        .par_chunks_mut(cols)
        .zip(ys.par_iter())
        .for_each(|(row, &y)| {
            for (cell, &x) in row.iter_mut().zip(xs.iter()) {
                *cell = control_at(Position::new(x, y), &side_a, &side_b, config);
            }
        });

    DominanceGrid { xs, ys, values }
}
