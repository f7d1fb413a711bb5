use thiserror::Error;

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must lie in {range}, got {value}")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f32,
    },

    #[error("block boundaries must satisfy 0 < low_mid < mid_high < 1 (got {low_mid}, {mid_high})")]
    BoundaryOrder { low_mid: f32, mid_high: f32 },

    #[error("invalid config json: {0}")]
    InvalidJson(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Tracking data loading failures.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tracking json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("frame rate must be positive, got {0}")]
    InvalidFps(f32),

    #[error("frame {index} out of range (dataset has {len} frames)")]
    FrameOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
