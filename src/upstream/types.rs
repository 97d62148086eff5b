//! Upstream error definitions and classification.

use std::error::Error as _;

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while exchanging a call with the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a status the transport treats as an error.
    #[error("{reason}")]
    Status { status: StatusCode, reason: String },

    /// Upstream could not be reached (DNS, refused connection, TLS, timeout).
    #[error("{0}")]
    Unreachable(String),

    /// Anything else (request building, reading the upstream body).
    #[error("{0}")]
    Internal(String),
}

impl UpstreamError {
    /// Error for a failing upstream status, with its canonical reason phrase.
    pub fn status(status: StatusCode) -> Self {
        Self::Status {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::status(status);
        }
        if err.is_timeout() {
            return Self::Unreachable("timed out".to_string());
        }
        if err.is_connect() || err.is_request() || err.is_redirect() {
            return Self::Unreachable(root_cause(&err));
        }
        Self::Internal(root_cause(&err))
    }
}

/// Innermost error message, which names the actual cause (for example
/// "Connection refused") rather than the generic reqwest wrapper text.
fn root_cause(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message = inner.to_string();
        source = inner.source();
    }
    message
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// A response received from the upstream.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    /// Status the upstream answered with.
    pub status: StatusCode,
    /// Upstream body, untouched.
    pub body: Bytes,
}
