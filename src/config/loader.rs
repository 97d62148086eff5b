//! Configuration loading from the process environment.
//!
//! Every setting is read from an environment variable; the same setting can
//! also be passed as a long flag, which wins over the environment.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::config::schema::{
    ProxyConfig, DEFAULT_MAINNET_RPC, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_TESTNET_RPC,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command line / environment surface of the proxy binary.
#[derive(Debug, Parser)]
#[command(name = "og-rpc-proxy")]
#[command(about = "Forwards JSON-RPC calls to the 0G mainnet or testnet endpoints", long_about = None)]
pub struct Cli {
    /// Mainnet upstream URL.
    #[arg(long, env = "OFFICIAL_RPC", default_value = DEFAULT_MAINNET_RPC)]
    pub mainnet_rpc: String,

    /// Testnet upstream URL, used for `?network=testnet`.
    #[arg(long, env = "TESTNET_RPC", default_value = DEFAULT_TESTNET_RPC)]
    pub testnet_rpc: String,

    /// Port to listen on (all interfaces).
    #[arg(long, env = "PROXY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Default log level; RUST_LOG takes precedence when set.
    #[arg(long, env = "PROXY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Report upstream 4xx/5xx statuses to the caller instead of relaying
    /// the upstream body as 200.
    #[arg(
        long,
        env = "PROXY_STRICT_UPSTREAM_STATUS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub strict_upstream_status: bool,

    /// Maximum inbound request body size in bytes.
    #[arg(long, env = "PROXY_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Route upstream calls through the proxies named by HTTP_PROXY,
    /// HTTPS_PROXY and NO_PROXY.
    #[arg(
        long,
        env = "PROXY_USE_SYSTEM_PROXY",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub use_system_proxy: bool,
}

impl From<Cli> for ProxyConfig {
    fn from(cli: Cli) -> Self {
        Self {
            mainnet_rpc: cli.mainnet_rpc,
            testnet_rpc: cli.testnet_rpc,
            port: cli.port,
            log_level: cli.log_level,
            strict_upstream_status: cli.strict_upstream_status,
            max_body_bytes: cli.max_body_bytes,
            use_system_proxy: cli.use_system_proxy,
        }
    }
}

/// Build and validate the configuration from parsed arguments.
pub fn load_config(cli: Cli) -> Result<ProxyConfig, ConfigError> {
    let config = ProxyConfig::from(cli);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
