//! # Analysis Module
//!
//! Per-frame tactical metrics.
//!
//! ## Submodules
//!
//! - `velocity` - Frame-delta velocities with EMA smoothing and speed cap
//! - `pitch_control` - Time-to-intercept dominance field
//! - `metrics` - Hull, team shape and Compactness Index
//! - `shape_classifier` - Position bands and formation labels

pub mod metrics;
pub mod pitch_control;
pub mod shape_classifier;
pub mod velocity;
