//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! POST /?network=<label>
//!     → network.rs (read first `network` value, default "mainnet")
//!     → Network::from_label ("testnet" → testnet, anything else → mainnet)
//!     → RoutingDecision { requested, network, target_url }
//! ```
//!
//! The decision is recomputed for every request and depends only on the
//! query string and the immutable config.

pub mod network;

pub use network::{route, Network, RoutingDecision};
