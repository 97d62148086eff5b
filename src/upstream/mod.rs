//! Upstream RPC subsystem.
//!
//! # Data Flow
//! ```text
//! raw request body + RoutingDecision.target_url
//!     → client.rs (POST with JSON content type and proxy User-Agent, 30s deadline)
//!     → UpstreamReply { status, body }   on any received response
//!     → UpstreamError                    on transport failure (or failing
//!                                        status in strict mode)
//! ```

pub mod client;
pub mod types;

pub use client::{UpstreamClient, UPSTREAM_TIMEOUT, USER_AGENT};
pub use types::{UpstreamError, UpstreamReply, UpstreamResult};
