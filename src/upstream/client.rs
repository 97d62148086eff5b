//! Upstream JSON-RPC client.
//!
//! # Responsibilities
//! - POST raw call bodies to the selected upstream
//! - Identify the proxy with a fixed User-Agent
//! - Bound every exchange with a single 30 second deadline
//! - Classify failures into [`UpstreamError`]

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::config::ProxyConfig;
use crate::upstream::types::{UpstreamError, UpstreamReply, UpstreamResult};

/// User-Agent sent on every forwarded call.
pub const USER_AGENT: &str = "0G-RPC-Proxy/1.0";

/// Deadline for one upstream exchange, response body included.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    strict_status: bool,
}

impl UpstreamClient {
    /// Create a new upstream client.
    ///
    /// With `strict_upstream_status`, upstream 4xx/5xx responses are returned
    /// as [`UpstreamError::Status`] instead of an [`UpstreamReply`].
    pub fn new(config: &ProxyConfig) -> UpstreamResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(UPSTREAM_TIMEOUT);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder
            .build()
            .map_err(|e| UpstreamError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            strict_status: config.strict_upstream_status,
        })
    }

    /// Forward `payload` verbatim to `target_url`. Single attempt, no retry.
    pub async fn forward(&self, target_url: &str, payload: Bytes) -> UpstreamResult<UpstreamReply> {
        let response = self
            .http
            .post(target_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let response = if self.strict_status {
            response.error_for_status()?
        } else {
            response
        };

        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamReply { status, body })
    }
}
