//! # tactical_core - Spatial Dominance & Defensive Shape Engine
//!
//! Derives tactical metrics from per-frame football tracking data:
//!
//! - Smoothed, speed-capped player velocities
//! - A pitch-control (dominance) field from a time-to-intercept model
//! - A Compactness Index for the defending side's outfield shape
//! - Position bands and coarse formation labels
//!
//! Every computation is a synchronous function of one frame plus the
//! velocity state the caller threads in from the previous frame.

// NaN-rejecting comparisons (`!(x > 0.0)`) are intentional in validation
#![allow(clippy::neg_cmp_op_on_partial_ord)]

pub mod analysis;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

pub use analysis::metrics::{compute_ci, Block, CompactnessResult, HullOutcome};
pub use analysis::pitch_control::{control_grid, DominanceGrid};
pub use engine::{EngineConfig, FrameAnalysis, FrameEngine, FrameReport, VelocityState};
pub use error::{ConfigError, CoreError, DataError, Result};
pub use models::{EntityId, Frame, PerTeam, Position, Possession, Snapshot, TeamSide, Velocity, VelocityMap};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
