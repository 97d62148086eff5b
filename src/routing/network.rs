//! Upstream selection from the `network` query parameter.
//!
//! Exactly `network=testnet` selects the testnet upstream. Anything else,
//! including a missing or empty parameter and other spellings such as
//! `Testnet`, falls back to mainnet.

use std::fmt;

use crate::config::ProxyConfig;

/// Query parameter that selects the upstream.
pub const NETWORK_PARAM: &str = "network";

/// Label reported when the caller did not ask for a network.
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Upstream network a call is forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Map a requested network label to an upstream.
    pub fn from_label(label: &str) -> Self {
        match label {
            "testnet" => Network::Testnet,
            _ => Network::Mainnet,
        }
    }

    /// Upstream URL for this network.
    pub fn target_url(self, config: &ProxyConfig) -> &str {
        match self {
            Network::Mainnet => &config.mainnet_rpc,
            Network::Testnet => &config.testnet_rpc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a single POST is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision<'a> {
    /// Network label as requested by the caller (defaulted to `mainnet`).
    pub requested: String,
    /// Upstream actually selected.
    pub network: Network,
    /// URL of the selected upstream.
    pub target_url: &'a str,
}

/// First non-empty `network` value in a raw query string.
///
/// Query values are percent-decoded; blank values are ignored.
pub fn network_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == NETWORK_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Decide the upstream for a request with the given raw query string.
pub fn route<'a>(config: &'a ProxyConfig, query: Option<&str>) -> RoutingDecision<'a> {
    let requested = network_param(query).unwrap_or_else(|| DEFAULT_NETWORK.to_string());
    let network = Network::from_label(&requested);

    RoutingDecision {
        target_url: network.target_url(config),
        network,
        requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProxyConfig {
        ProxyConfig {
            mainnet_rpc: "http://mainnet.local/".into(),
            testnet_rpc: "http://testnet.local/".into(),
            ..ProxyConfig::default()
        }
    }

    #[test]
    fn test_testnet_selected_only_on_exact_match() {
        let config = config();
        let decision = route(&config, Some("network=testnet"));
        assert_eq!(decision.network, Network::Testnet);
        assert_eq!(decision.target_url, "http://testnet.local/");
        assert_eq!(decision.requested, "testnet");
    }

    #[test]
    fn test_everything_else_goes_to_mainnet() {
        let config = config();
        for query in [
            None,
            Some(""),
            Some("network="),
            Some("network=mainnet"),
            Some("network=Testnet"),
            Some("network=testnet2"),
            Some("network=goerli"),
            Some("net=testnet"),
        ] {
            let decision = route(&config, query);
            assert_eq!(decision.network, Network::Mainnet, "query {query:?}");
            assert_eq!(decision.target_url, "http://mainnet.local/");
        }
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(
            network_param(Some("network=testnet&network=mainnet")).as_deref(),
            Some("testnet")
        );
        assert_eq!(
            network_param(Some("network=&network=testnet")).as_deref(),
            Some("testnet")
        );
    }

    #[test]
    fn test_percent_decoded() {
        assert_eq!(
            network_param(Some("id=1&network=test%6Eet")).as_deref(),
            Some("testnet")
        );
    }

    #[test]
    fn test_default_label_when_absent() {
        let config = config();
        assert_eq!(route(&config, None).requested, "mainnet");
        assert_eq!(route(&config, Some("foo=bar")).requested, "mainnet");
    }
}
