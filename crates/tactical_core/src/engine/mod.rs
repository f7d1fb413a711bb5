//! # Engine Module
//!
//! Constants, configuration and the per-frame pipeline.

pub mod config;
pub mod frame_engine;
pub mod physics_constants;

pub use config::EngineConfig;
pub use frame_engine::{FrameAnalysis, FrameEngine, FrameReport, VelocityState};
