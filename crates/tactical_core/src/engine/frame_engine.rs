//! Per-frame metric pipeline
//!
//! One call per frame: velocities are estimated first (the dominance field
//! consumes them), then the dominance grid and both teams' compactness run
//! concurrently. The smoothed velocity state is owned by the caller and
//! threaded from frame to frame.

use serde::Serialize;
use tracing::{debug, info};

use super::config::EngineConfig;
use super::physics_constants::field;
use crate::analysis::metrics::{compute_ci, is_defending, outfield_positions, outfield_shape, CompactnessResult, OutfieldShape};
use crate::analysis::pitch_control::{control_grid, DominanceGrid};
use crate::analysis::shape_classifier::detect_formation;
use crate::analysis::velocity;
use crate::data::{frame_to_match_time, TrackingDataset};
use crate::error::{ConfigError, DataError};
use crate::models::{Frame, PerTeam, Possession, Snapshot, TeamSide, VelocityMap};

/// Smoothed velocities carried between frames.
pub type VelocityState = PerTeam<VelocityMap>;

/// Everything derived from one frame. Read-only for consumers.
#[derive(Debug, Clone, Serialize)]
pub struct FrameAnalysis {
    pub frame_id: u64,
    /// `[MM:SS]` label; set when the frame's index in its dataset is known
    pub match_time: Option<String>,
    pub possession: Possession,
    /// Smoothed, clamped velocities; thread into the next frame
    pub velocities: VelocityState,
    /// 1.0 = home control, 0.0 = away control
    pub control: DominanceGrid,
    /// `None` when the team is not defending
    pub compactness: PerTeam<Option<CompactnessResult>>,
    pub formation: PerTeam<Option<String>>,
    pub shape: PerTeam<OutfieldShape>,
}

/// Compact per-frame summary for sequence runs.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame_id: u64,
    pub match_time: String,
    pub possession: Possession,
    /// Share of the pitch controlled by the home side
    pub home_control: f32,
    /// Rounded for display
    pub compactness: PerTeam<Option<CompactnessResult>>,
    pub formation: PerTeam<Option<String>>,
}

impl FrameReport {
    pub fn from_analysis(analysis: &FrameAnalysis) -> Self {
        Self {
            frame_id: analysis.frame_id,
            match_time: analysis.match_time.clone().unwrap_or_default(),
            possession: analysis.possession,
            home_control: analysis.control.mean(),
            compactness: PerTeam {
                home: analysis.compactness.home.map(|c| c.rounded()),
                away: analysis.compactness.away.map(|c| c.rounded()),
            },
            formation: analysis.formation.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameEngine {
    config: EngineConfig,
}

impl FrameEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advance the smoothed velocity state by one frame.
    pub fn velocities(&self, frame: &Frame, previous: Option<&Frame>, state: &VelocityState) -> VelocityState {
        let empty = Snapshot::new();
        let prev_home = previous.map(|p| &p.home).unwrap_or(&empty);
        let prev_away = previous.map(|p| &p.away).unwrap_or(&empty);
        let cfg = &self.config.velocity;

        VelocityState {
            home: velocity::step(&frame.home, prev_home, &state.home, cfg),
            away: velocity::step(&frame.away, prev_away, &state.away, cfg),
        }
    }

    fn compactness(&self, frame: &Frame, side: TeamSide) -> Option<CompactnessResult> {
        // no ball position: evaluate as if on the halfway line
        let ball_x = frame.ball.map(|b| b.x).unwrap_or(field::CENTER_X);
        if !is_defending(frame.possession, ball_x, side) {
            return None;
        }
        let outfield = outfield_positions(frame.team(side), side);
        Some(compute_ci(&outfield, side, &self.config.calibration))
    }

    /// Run every metric on one frame.
    pub fn process(&self, frame: &Frame, previous: Option<&Frame>, state: &VelocityState) -> FrameAnalysis {
        let velocities = self.velocities(frame, previous, state);

        let (control, (home_ci, away_ci)) = rayon::join(
            || {
                control_grid(
                    &frame.home,
                    &frame.away,
                    Some(&velocities.home),
                    Some(&velocities.away),
                    &self.config.pitch_control,
                )
            },
            || {
                rayon::join(
                    || self.compactness(frame, TeamSide::Home),
                    || self.compactness(frame, TeamSide::Away),
                )
            },
        );

        debug!(
            frame_id = frame.frame_id,
            possession = ?frame.possession,
            home_ci = ?home_ci.map(|c| c.score),
            away_ci = ?away_ci.map(|c| c.score),
            "processed frame"
        );

        FrameAnalysis {
            frame_id: frame.frame_id,
            match_time: None,
            possession: frame.possession,
            velocities,
            control,
            compactness: PerTeam { home: home_ci, away: away_ci },
            formation: PerTeam {
                home: detect_formation(&frame.home),
                away: detect_formation(&frame.away),
            },
            shape: PerTeam {
                home: outfield_shape(&frame.home, TeamSide::Home),
                away: outfield_shape(&frame.away, TeamSide::Away),
            },
        }
    }

    /// Summaries for the first `limit` frames (all when `None`).
    pub fn analyze_sequence(&self, dataset: &TrackingDataset, limit: Option<usize>) -> Vec<FrameReport> {
        let count = limit.map_or(dataset.len(), |n| n.min(dataset.len()));
        let mut state = VelocityState::default();
        let mut reports = Vec::with_capacity(count);

        for (i, frame) in dataset.frames.iter().take(count).enumerate() {
            let previous = i.checked_sub(1).map(|p| &dataset.frames[p]);
            let mut analysis = self.process(frame, previous, &state);
            analysis.match_time = Some(frame_to_match_time(i as i64, dataset.fps, &dataset.timing));
            reports.push(FrameReport::from_analysis(&analysis));
            state = analysis.velocities;
        }

        info!(frames = reports.len(), "analyzed tracking sequence");
        reports
    }

    /// Full analysis of frame `index`, with velocity state warmed up from frame 0.
    pub fn analyze_frame(&self, dataset: &TrackingDataset, index: usize) -> Result<FrameAnalysis, DataError> {
        let frame = dataset.frame(index)?;
        let mut state = VelocityState::default();
        for i in 0..index {
            let previous = i.checked_sub(1).map(|p| &dataset.frames[p]);
            state = self.velocities(&dataset.frames[i], previous, &state);
        }
        let previous = index.checked_sub(1).map(|p| &dataset.frames[p]);
        let mut analysis = self.process(frame, previous, &state);
        analysis.match_time = Some(frame_to_match_time(index as i64, dataset.fps, &dataset.timing));
        Ok(analysis)
    }
}
