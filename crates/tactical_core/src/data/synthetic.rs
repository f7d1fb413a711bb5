//! Deterministic synthetic tracking for demos and tests.
//!
//! Home lines up 4-3-3 attacking toward x = 105, away 4-4-2. Every player
//! drifts sinusoidally with unit Gaussian jitter; the ball loops around the
//! centre circle area.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use super::match_clock::PeriodTiming;
use super::possession::{infer_possession, CONTROL_RADIUS_M};
use super::tracking::TrackingDataset;
use crate::engine::physics_constants::field;
use crate::models::{Frame, Position, Snapshot};

const HOME_BASE: [(f32, f32); 11] = [
    (10.0, 34.0), // GK
    (25.0, 10.0),
    (25.0, 25.0),
    (25.0, 43.0),
    (25.0, 58.0),
    (45.0, 20.0),
    (50.0, 34.0),
    (45.0, 48.0),
    (70.0, 15.0),
    (75.0, 34.0),
    (70.0, 53.0),
];

const AWAY_BASE: [(f32, f32); 11] = [
    (95.0, 34.0), // GK
    (80.0, 10.0),
    (80.0, 25.0),
    (80.0, 43.0),
    (80.0, 58.0),
    (60.0, 10.0),
    (55.0, 25.0),
    (55.0, 43.0),
    (60.0, 58.0),
    (35.0, 25.0),
    (35.0, 43.0),
];

fn jittered_team(base: &[(f32, f32)], t: f32, phase: f32, rng: &mut ChaCha8Rng) -> Snapshot {
    base.iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let k = i as f32 + phase;
            let nx: f32 = StandardNormal.sample(rng);
            let ny: f32 = StandardNormal.sample(rng);
            let dx = (t * 2.0 + k).sin() * 3.0 + nx;
            let dy = (t * 1.5 + k).cos() * 2.0 + ny;
            (i as u32 + 1, Position::new(x + dx, y + dy))
        })
        .collect()
}

/// Generate `n_frames` of tracking at `fps`. Same seed, same data.
pub fn generate_synthetic_tracking(n_frames: usize, fps: f32, seed: u64) -> TrackingDataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let frames = (0..n_frames)
        .map(|frame| {
            let t = frame as f32 / fps;
            let home = jittered_team(&HOME_BASE, t, 0.0, &mut rng);
            let away = jittered_team(&AWAY_BASE, t, 5.0, &mut rng);
            let ball = Position::new(field::CENTER_X + t.sin() * 30.0, field::CENTER_Y + (t * 0.7).cos() * 20.0);
            let possession = infer_possession(&home, &away, Some(ball), CONTROL_RADIUS_M);

            Frame {
                frame_id: frame as u64,
                home,
                away,
                ball: Some(ball),
                possession,
            }
        })
        .collect();

    debug!(n_frames, fps, seed, "generated synthetic tracking");

    TrackingDataset {
        fps,
        timing: PeriodTiming::default(),
        frames,
    }
}
