//! # Models
//!
//! Per-frame tracking data shared by every metric.

pub mod frame;

pub use frame::*;
