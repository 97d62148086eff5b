//! Response construction and error mapping.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes and plain-text messages
//! - Build JSON responses
//! - Define the CORS headers attached to every response
//!
//! # Status mapping
//! - Unknown GET path → 404
//! - Unsupported method → 501
//! - Upstream failing status (strict mode) → that status
//! - Upstream unreachable or timed out → 502
//! - Anything else → 500

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Methods advertised to browsers.
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Request headers browsers may send.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// CORS headers present on every response, success or error.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ),
    ]
}

/// `200 OK` with a JSON content type.
pub fn json_response(body: impl Into<Body>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body.into(),
    )
        .into_response()
}

/// Failure of a single request, rendered at the handler boundary.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Not Found")]
    NotFound,

    #[error("Unsupported method ('{0}')")]
    UnsupportedMethod(Method),

    #[error("Upstream error: {reason}")]
    UpstreamHttp { status: StatusCode, reason: String },

    #[error("Bad Gateway: {0}")]
    BadGateway(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::NotFound => StatusCode::NOT_FOUND,
            ProxyError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
            ProxyError::UpstreamHttp { status, .. } => *status,
            ProxyError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, reason } => ProxyError::UpstreamHttp { status, reason },
            UpstreamError::Unreachable(reason) => ProxyError::BadGateway(reason),
            UpstreamError::Internal(reason) => ProxyError::Internal(reason),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
