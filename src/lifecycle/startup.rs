//! Startup orchestration.
//!
//! Fail fast: an invalid config or an unbindable port ends the process
//! before any traffic is accepted.

use tokio::net::TcpListener;

use crate::config::ProxyConfig;

/// Log where calls will be forwarded and how to reach the proxy.
pub fn announce(config: &ProxyConfig) {
    tracing::info!(
        mainnet_rpc = %config.mainnet_rpc,
        testnet_rpc = %config.testnet_rpc,
        port = config.port,
        strict_upstream_status = config.strict_upstream_status,
        "Starting 0G RPC proxy"
    );
}

/// Bind the listener on all interfaces at the configured port.
pub async fn bind(config: &ProxyConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Server ready");
    tracing::info!("Health check: GET /health");
    tracing::info!("RPC calls: POST / (mainnet) or POST /?network=testnet");

    Ok(listener)
}
