//! JSON tracking dataset
//!
//! ```json
//! {
//!   "fps": 25.0,
//!   "timing": {"startPeriod1": 0.0},
//!   "frames": [
//!     {"frame_id": 0, "home": {"1": {"x": 10.0, "y": 34.0}}, "away": {},
//!      "ball": {"x": 52.5, "y": 34.0}, "possession": "home"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::match_clock::PeriodTiming;
use crate::error::DataError;
use crate::models::Frame;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingDataset {
    pub fps: f32,
    #[serde(default)]
    pub timing: PeriodTiming,
    pub frames: Vec<Frame>,
}

impl TrackingDataset {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Result<&Frame, DataError> {
        self.frames.get(index).ok_or(DataError::FrameOutOfRange {
            index,
            len: self.frames.len(),
        })
    }
}

/// Parse a dataset, dropping non-finite coordinates.
pub fn parse_tracking(json: &str) -> Result<TrackingDataset, DataError> {
    let mut dataset: TrackingDataset = serde_json::from_str(json)?;
    if !(dataset.fps > 0.0) {
        return Err(DataError::InvalidFps(dataset.fps));
    }
    dataset.frames = dataset.frames.into_iter().map(Frame::sanitized).collect();
    debug!(frames = dataset.frames.len(), fps = dataset.fps, "parsed tracking dataset");
    Ok(dataset)
}

pub fn load_tracking(path: &Path) -> Result<TrackingDataset, DataError> {
    let json = fs::read_to_string(path)?;
    let dataset = parse_tracking(&json)?;
    info!(path = %path.display(), frames = dataset.len(), "loaded tracking data");
    Ok(dataset)
}

pub fn save_tracking(path: &Path, dataset: &TrackingDataset) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json)?;
    info!(path = %path.display(), frames = dataset.len(), "saved tracking data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Possession};

    #[test]
    fn test_parse_minimal() {
        let json = r#"{"fps": 25.0, "frames": [{"frame_id": 3, "home": {"2": {"x": 1.0, "y": 2.0}}}]}"#;
        let ds = parse_tracking(json).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.frames[0].home[&2], Position::new(1.0, 2.0));
        assert!(ds.frames[0].away.is_empty());
        assert_eq!(ds.frames[0].possession, Possession::Contested);
        assert_eq!(ds.timing, PeriodTiming::default());
    }

    #[test]
    fn test_rejects_bad_fps() {
        let err = parse_tracking(r#"{"fps": 0.0, "frames": []}"#).unwrap_err();
        assert!(matches!(err, DataError::InvalidFps(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_tracking(r#"{"fps": 25.0"#).unwrap_err();
        assert!(matches!(err, DataError::InvalidJson(_)));
    }

    #[test]
    fn test_frame_out_of_range() {
        let ds = parse_tracking(r#"{"fps": 25.0, "frames": []}"#).unwrap();
        assert!(matches!(ds.frame(0), Err(DataError::FrameOutOfRange { index: 0, len: 0 })));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tracking.json");
        let ds = crate::data::generate_synthetic_tracking(5, 25.0, 7);

        save_tracking(&path, &ds).unwrap();
        let loaded = load_tracking(&path).unwrap();
        assert_eq!(loaded.len(), 5);
        assert_eq!(loaded.frames[4].frame_id, 4);
        assert_eq!(loaded.frames[2].home.len(), 11);
    }
}
