//! Error types for wellb.

use thiserror::Error;

/// Errors that can occur while running wellb.
#[derive(Debug, Error)]
pub enum WellbError {
    /// Configuration could not be read, written, or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The data file could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Input could not be parsed (dates, months, JSON).
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for WellbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
