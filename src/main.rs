//! 0G RPC Proxy
//!
//! Forwards JSON-RPC calls to the official 0G endpoints so clients get chain
//! data without running a synced node.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                  RPC PROXY                   │
//!                         │                                              │
//!     Client Request      │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│ routing  │───▶│upstream │──┼──▶ mainnet /
//!                         │  │dispatch │    │ network= │    │ client  │  │    testnet RPC
//!     Client Response     │  └─────────┘    └──────────┘    └─────────┘  │
//!     ◀───────────────────┼── CORS + request ID on every response        │
//!                         │                                              │
//!                         │  config · lifecycle · observability          │
//!                         └──────────────────────────────────────────────┘
//! ```

use clap::Parser;

use og_rpc_proxy::config::{load_config, Cli};
use og_rpc_proxy::lifecycle::{signals, startup};
use og_rpc_proxy::observability::init_logging;
use og_rpc_proxy::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli)?;

    init_logging(&config.log_level);
    startup::announce(&config);

    let listener = startup::bind(&config).await?;
    let server = HttpServer::new(config)?;

    server.run(listener, signals::wait_for_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
