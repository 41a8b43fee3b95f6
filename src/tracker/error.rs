//! Errors returned by issue tracker operations

use thiserror::Error;

/// Failure talking to the remote issue tracker
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Client could not be built from the given settings
    #[error("invalid tracker configuration: {0}")]
    Config(String),
    /// Request never got a response (DNS, TLS, connection refused, timeout)
    #[error("network error: {0}")]
    Network(String),
    /// Tracker answered with a non-success status
    #[error("tracker returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    /// Response body was not what we expected
    #[error("could not read tracker response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TrackerError::Parse(err.to_string())
        } else if err.is_builder() {
            TrackerError::Config(err.to_string())
        } else {
            TrackerError::Network(err.to_string())
        }
    }
}
