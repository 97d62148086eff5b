//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, CORS headers)
//!     → dispatch on method
//!         OPTIONS → empty 200
//!         GET     → health.rs (payload on / and /health, 404 elsewhere)
//!         POST    → routing (pick upstream) → upstream client (forward)
//!         other   → 501
//!     → response.rs (error → status mapping)
//!     → Send to client
//! ```

pub mod health;
pub mod request;
pub mod response;
pub mod server;

pub use request::{CallSummary, UuidRequestId, X_REQUEST_ID};
pub use response::ProxyError;
pub use server::HttpServer;
