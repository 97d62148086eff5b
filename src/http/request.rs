//! Request inspection helpers.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for correlation in logs
//! - Summarise the forwarded JSON-RPC call for diagnostics
//!
//! The call summary is observational only; a body that is not JSON is still
//! forwarded untouched.

use axum::http::{HeaderValue, Request};
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Request ID of an inbound request, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// What a forwarded body looks like, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSummary {
    /// A single call; `"unknown"` when the object has no string `method`.
    Method(String),
    /// A batch of calls.
    Batch(usize),
    /// Not a JSON object or array.
    Unclassified,
}

impl CallSummary {
    /// Summarise a raw body. Never fails.
    pub fn inspect(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(call)) => Self::Method(
                call.get("method")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            ),
            Ok(Value::Array(calls)) => Self::Batch(calls.len()),
            _ => Self::Unclassified,
        }
    }
}
