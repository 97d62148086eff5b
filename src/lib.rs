//! 0G RPC proxy library.
//!
//! Forwards JSON-RPC POST bodies verbatim to a mainnet or testnet upstream
//! chosen by the `network` query parameter, answers health checks and CORS
//! preflights.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
