//! Unified error handling for the Treble client
//!
//! One error type covers the two failure kinds the client distinguishes:
//! local precondition failures raised before any network I/O, and
//! transport/HTTP failures raised by the round trip itself. Errors are never
//! converted into a different kind on the way out; rethrow paths hand the
//! caller the original failure.

use thiserror::Error;

/// Result type alias for the Treble client
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// An operation scoped to the current user was called without a session
    #[error("user not logged in")]
    NotLoggedIn,

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed (connect, DNS, protocol failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response body could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Malformed caller input, e.g. an invalid MIME type on an upload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code carried by this error, when there is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Deserialization(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_exposed_only_for_http_errors() {
        let err = ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::NotLoggedIn.status(), None);
    }

    #[test]
    fn serde_errors_map_to_serialization() {
        let err = serde_json::from_str::<i64>("not json").unwrap_err();
        let err: ApiError = err.into();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
