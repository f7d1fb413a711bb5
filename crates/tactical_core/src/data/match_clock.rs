//! Frame index to continuous match time.

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::motion::TRACKING_FPS;

/// Video-time boundaries of the two halves (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodTiming {
    pub start_period1: f32,
    /// `None` means the first half never ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_period1: Option<f32>,
    pub start_period2: f32,
}

/// `"[MM:SS]"` for a frame, continuing past 45:00 in the second half.
///
/// Negative frames give `"[00:00]"`; a non-positive fps falls back to 29.97.
pub fn frame_to_match_time(frame_idx: i64, fps: f32, timing: &PeriodTiming) -> String {
    if frame_idx < 0 {
        return "[00:00]".to_string();
    }

    let fps = if fps > 0.0 { fps as f64 } else { TRACKING_FPS as f64 };
    let start1 = timing.start_period1 as f64;
    let end1 = timing.end_period1.map(f64::from).unwrap_or(f64::INFINITY);

    let video_time = start1 + frame_idx as f64 / fps;

    let (elapsed, base_minutes) = if video_time < end1 {
        (video_time - start1, 0)
    } else {
        (video_time - timing.start_period2 as f64, 45)
    };

    let total_secs = elapsed.max(0.0).round() as i64;
    let mins = base_minutes + total_secs / 60;
    let secs = total_secs % 60;

    format!("[{:02}:{:02}]", mins, secs)
}
