//! # Data Module
//!
//! Frame sources and match-clock helpers feeding the engine.
//!
//! - `tracking` - JSON tracking dataset load/save
//! - `synthetic` - Deterministic synthetic tracking
//! - `possession` - Nearest-player possession heuristic
//! - `match_clock` - Frame index to `[MM:SS]`

pub mod match_clock;
pub mod possession;
pub mod synthetic;
pub mod tracking;

pub use match_clock::{frame_to_match_time, PeriodTiming};
pub use possession::infer_possession;
pub use synthetic::generate_synthetic_tracking;
pub use tracking::{load_tracking, parse_tracking, save_tracking, TrackingDataset};
