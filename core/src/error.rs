//! Error types for callboard-core

use thiserror::Error;

/// Errors raised while loading data or configuration.
///
/// Aggregation itself never fails; these only surface at startup.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed call data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The global log subscriber could not be installed
    #[error("logging error: {0}")]
    Logging(String),

    /// No day key matches the requested selection
    #[error("unknown day: '{0}'")]
    UnknownDay(String),

    /// More than one day key matches the requested prefix
    #[error("ambiguous day: '{input}' matches {candidates:?}")]
    AmbiguousDay {
        input: String,
        candidates: Vec<String>,
    },
}

/// Result type alias for callboard-core
pub type Result<T> = std::result::Result<T, Error>;
