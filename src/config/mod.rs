//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables / long flags
//!     → loader.rs (clap parse into Cli, convert)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with every request handler
//! ```
//!
//! Config never changes after startup, so the upstream chosen for a given
//! `network` value is fixed for the life of the process.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, Cli, ConfigError};
pub use schema::ProxyConfig;
pub use validation::ValidationError;
