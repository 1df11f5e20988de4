//! Chain descriptor value types.
//!
//! A [`ChainDescriptor`] carries the metadata the wallet-connection UI needs
//! for one network. Everything besides the numeric [`ChainId`] is opaque to
//! the registry and passed through unchanged.
//!
//! Descriptors serialise with camelCase field names, matching the JSON shape
//! the consuming web application expects.

use serde::Serialize;
use url::Url;

/// Numeric chain identifier (EIP-155 chain id).
pub type ChainId = u64;

/// Native currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    /// Full currency name, e.g. "Ether".
    pub name: String,
    /// Ticker symbol, e.g. "ETH".
    pub symbol: String,
    /// Number of decimal places in the smallest unit.
    pub decimals: u8,
}

/// Metadata record describing one supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// Chain id, unique within the registry.
    pub id: ChainId,
    /// Display name.
    pub name: String,
    /// Native currency metadata.
    pub native_currency: NativeCurrency,
    /// RPC endpoint URLs.
    pub rpc_urls: Vec<Url>,
    /// Block explorer URLs.
    pub block_explorer_urls: Vec<Url>,
    /// Whether this is a test network.
    pub testnet: bool,
}

impl ChainDescriptor {
    /// Renders the EIP-3085 `wallet_addEthereumChain` parameter object for
    /// this chain. The chain id is hex-encoded as the wallet RPC expects.
    #[must_use]
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: format!("{:#x}", self.id),
            chain_name: self.name.clone(),
            native_currency: self.native_currency.clone(),
            rpc_urls: self.rpc_urls.clone(),
            block_explorer_urls: self.block_explorer_urls.clone(),
        }
    }
}

/// EIP-3085 `wallet_addEthereumChain` request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// Chain id as a 0x-prefixed hex string.
    pub chain_id: String,
    /// Display name.
    pub chain_name: String,
    /// Native currency metadata.
    pub native_currency: NativeCurrency,
    /// RPC endpoint URLs.
    pub rpc_urls: Vec<Url>,
    /// Block explorer URLs.
    pub block_explorer_urls: Vec<Url>,
}
