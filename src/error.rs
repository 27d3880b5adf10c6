//! Error types.
//!
//! Core operations are total: malformed samples, duplicate keys and stale
//! completions are logged and swallowed. Only configuration loading returns
//! a `Result` to callers.

pub type GridResult<T> = Result<T, GridError>;

#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GridError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Why a scroll sample was dropped.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    #[error("sample is not finite (position {position_y}, timestamp {timestamp_ms})")]
    NotFinite { position_y: f64, timestamp_ms: f64 },

    #[error("sample timestamp {timestamp_ms} precedes previous {previous_ms}")]
    NonMonotonic { timestamp_ms: f64, previous_ms: f64 },
}
