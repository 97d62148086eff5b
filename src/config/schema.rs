//! Configuration schema definitions.
//!
//! The proxy is configured once at startup and the resulting [`ProxyConfig`]
//! is shared read-only by every request handler.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Default mainnet upstream.
pub const DEFAULT_MAINNET_RPC: &str = "https://evmrpc.0g.ai/";

/// Default testnet upstream.
pub const DEFAULT_TESTNET_RPC: &str = "https://evmrpc-testnet.0g.ai/";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 26657;

/// Default inbound body limit (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Root configuration for the RPC proxy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Upstream JSON-RPC endpoint used unless `network=testnet` is requested.
    pub mainnet_rpc: String,

    /// Upstream JSON-RPC endpoint used for `network=testnet`.
    pub testnet_rpc: String,

    /// Listening port, bound on all interfaces.
    pub port: u16,

    /// Default log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Turn upstream 4xx/5xx responses into errors carrying the upstream
    /// status instead of relaying the body as 200.
    pub strict_upstream_status: bool,

    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,

    /// Honour HTTP_PROXY / HTTPS_PROXY / NO_PROXY for upstream calls.
    pub use_system_proxy: bool,
}

impl ProxyConfig {
    /// Address the listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            mainnet_rpc: DEFAULT_MAINNET_RPC.to_string(),
            testnet_rpc: DEFAULT_TESTNET_RPC.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            strict_upstream_status: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            use_system_proxy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProxyConfig::default();
        assert_eq!(config.mainnet_rpc, "https://evmrpc.0g.ai/");
        assert_eq!(config.testnet_rpc, "https://evmrpc-testnet.0g.ai/");
        assert_eq!(config.port, 26657);
        assert!(!config.strict_upstream_status);
    }

    #[test]
    fn test_bind_address_all_interfaces() {
        let config = ProxyConfig {
            port: 8545,
            ..ProxyConfig::default()
        };
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:8545");
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ProxyConfig =
            serde_json::from_str(r#"{"testnet_rpc":"http://127.0.0.1:9545/"}"#).unwrap();
        assert_eq!(config.testnet_rpc, "http://127.0.0.1:9545/");
        assert_eq!(config.mainnet_rpc, DEFAULT_MAINNET_RPC);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }
}
