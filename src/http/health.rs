//! Health-check payload served on `GET /` and `GET /health`.

use serde::Serialize;

use crate::config::ProxyConfig;

/// Host used in usage hints when the request carries no `Host` header.
pub const DEFAULT_HOST: &str = "localhost";

const FEATURES: &[&str] = &[
    "No sync required",
    "Instant access to 0G data",
    "Mainnet and testnet support",
    "Full RPC compatibility",
];

#[derive(Debug, Serialize)]
pub struct HealthReport<'a> {
    pub status: &'static str,
    pub message: &'static str,
    pub mainnet_rpc: &'a str,
    pub testnet_rpc: &'a str,
    pub usage: Usage,
    pub features: &'static [&'static str],
}

/// How to invoke the proxy, as seen from the caller's `Host`.
#[derive(Debug, Serialize)]
pub struct Usage {
    pub mainnet: String,
    pub testnet: String,
}

impl<'a> HealthReport<'a> {
    pub fn new(config: &'a ProxyConfig, host: Option<&str>) -> Self {
        let host = host.unwrap_or(DEFAULT_HOST);
        Self {
            status: "healthy",
            message: "0G RPC Proxy is running",
            mainnet_rpc: &config.mainnet_rpc,
            testnet_rpc: &config.testnet_rpc,
            usage: Usage {
                mainnet: format!("POST {host}/"),
                testnet: format!("POST {host}/?network=testnet"),
            },
            features: FEATURES,
        }
    }

    /// Pretty-printed JSON body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
