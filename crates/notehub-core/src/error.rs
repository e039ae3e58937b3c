//! Error types for notehub-core

use thiserror::Error;

/// Result type alias using notehub-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the notes service.
///
/// Errors are `Clone` so the query cache can keep the last failure next to
/// the last known value for a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the notes service
    #[error("Server error: {message} (HTTP {status})")]
    Server { status: u16, message: String },

    /// Payload rejected by the notes service
    #[error("Validation error: {0}")]
    Validation(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Missing or malformed client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Response body did not match the expected shape
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidPayload(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidPayload(error.to_string())
    }
}
