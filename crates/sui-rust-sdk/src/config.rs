//! Network configuration for the Sui SDK.
//!
//! This module provides presets for the public Sui networks and a local
//! node, plus the default gas parameters used when assembling transactions.

use crate::error::{SuiError, SuiResult};
use url::Url;

/// Default gas budget in MIST (0.01 SUI).
pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;
/// Default gas price in MIST per unit.
pub const DEFAULT_GAS_PRICE: u64 = 1_000;

/// Known Sui networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Sui mainnet
    Mainnet,
    /// Sui testnet
    Testnet,
    /// Sui devnet
    Devnet,
    /// Local development network
    Local,
    /// Custom network
    Custom,
}

impl Network {
    /// Returns the network name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Local => "local",
            Network::Custom => "custom",
        }
    }

    /// Returns the chain identifier for networks whose genesis is fixed.
    ///
    /// Devnet and local networks are regenerated, so they have none.
    pub fn chain_identifier(&self) -> Option<&'static str> {
        match self {
            Network::Mainnet => Some("35834a8a"),
            Network::Testnet => Some("4c78adac"),
            Network::Devnet | Network::Local | Network::Custom => None,
        }
    }
}

/// Configuration for talking to a Sui network.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::SuiConfig;
///
/// let config = SuiConfig::testnet().with_gas_budget(50_000_000);
/// assert_eq!(config.gas_budget(), 50_000_000);
/// assert!(config.faucet_url().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// The network to connect to
    pub(crate) network: Network,
    /// JSON-RPC URL (fullnode)
    pub(crate) rpc_url: Url,
    /// Faucet URL (optional, for testnets)
    pub(crate) faucet_url: Option<Url>,
    /// Gas budget used when none is given
    pub(crate) gas_budget: u64,
    /// Gas price used when none is given
    pub(crate) gas_price: u64,
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self::devnet()
    }
}

impl SuiConfig {
    /// Creates a configuration for Sui mainnet.
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            rpc_url: Url::parse("https://fullnode.mainnet.sui.io:443").expect("valid mainnet URL"),
            faucet_url: None,
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }

    /// Creates a configuration for Sui testnet.
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            rpc_url: Url::parse("https://fullnode.testnet.sui.io:443").expect("valid testnet URL"),
            faucet_url: Some(
                Url::parse("https://faucet.testnet.sui.io").expect("valid faucet URL"),
            ),
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }

    /// Creates a configuration for Sui devnet.
    pub fn devnet() -> Self {
        Self {
            network: Network::Devnet,
            rpc_url: Url::parse("https://fullnode.devnet.sui.io:443").expect("valid devnet URL"),
            faucet_url: Some(
                Url::parse("https://faucet.devnet.sui.io").expect("valid faucet URL"),
            ),
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }

    /// Creates a configuration for a local network on the default ports
    /// (JSON-RPC on 9000, faucet on 9123).
    pub fn local() -> Self {
        Self {
            network: Network::Local,
            rpc_url: Url::parse("http://127.0.0.1:9000").expect("valid local URL"),
            faucet_url: Some(Url::parse("http://127.0.0.1:9123").expect("valid local faucet URL")),
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }

    /// Creates a custom configuration with the specified RPC URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sui_rust_sdk::SuiConfig;
    ///
    /// let config = SuiConfig::custom("https://my-node.example.com").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Config`] if `rpc_url` is not a valid URL.
    pub fn custom(rpc_url: &str) -> SuiResult<Self> {
        Ok(Self {
            network: Network::Custom,
            rpc_url: parse_url("RPC", rpc_url)?,
            faucet_url: None,
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
        })
    }

    /// Sets the default gas budget in MIST.
    #[must_use]
    pub fn with_gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = gas_budget;
        self
    }

    /// Sets the default gas price in MIST per unit.
    #[must_use]
    pub fn with_gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Sets a custom faucet URL.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Config`] if `url` is not a valid URL.
    pub fn with_faucet_url(mut self, url: &str) -> SuiResult<Self> {
        self.faucet_url = Some(parse_url("faucet", url)?);
        Ok(self)
    }

    /// Returns the network this config is for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the JSON-RPC URL.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Returns the faucet URL, if configured.
    pub fn faucet_url(&self) -> Option<&Url> {
        self.faucet_url.as_ref()
    }

    /// Returns the default gas budget in MIST.
    pub fn gas_budget(&self) -> u64 {
        self.gas_budget
    }

    /// Returns the default gas price in MIST per unit.
    pub fn gas_price(&self) -> u64 {
        self.gas_price
    }
}

fn parse_url(what: &str, url: &str) -> SuiResult<Url> {
    Url::parse(url).map_err(|e| SuiError::Config(format!("invalid {what} URL {url:?}: {e}")))
}
