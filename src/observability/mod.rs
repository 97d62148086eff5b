//! Observability subsystem.
//!
//! Line-oriented, timestamped logs on stdout via `tracing`. Every request
//! carries an `x-request-id` that handlers include in their log events.

pub mod logging;

pub use logging::init_logging;
