//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Announce upstreams → Bind listener
//!
//! Shutdown (signals.rs):
//!     SIGTERM/SIGINT → wait_for_signal() resolves
//!     → HttpServer::run stops accepting → in-flight requests drain → exit
//! ```
//!
//! `HttpServer::run` takes any future as its shutdown trigger, so tests can
//! stop a server with a oneshot channel instead of a signal.

pub mod signals;
pub mod startup;
