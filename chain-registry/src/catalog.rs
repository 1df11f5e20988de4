//! Compiled-in chain catalog.
//!
//! The supported networks are fixed at build time; nothing here is read from
//! the environment or from disk. Registration order is significant: it is the
//! order [`crate::chains`] enumerates and the fallback order for default-chain
//! resolution.

use url::Url;

use crate::chain::{ChainDescriptor, ChainId, NativeCurrency};

/// Chain id of the designated default network (Ethereum mainnet).
pub const DEFAULT_CHAIN_ID: ChainId = ETHEREUM_CHAIN_ID;

const ETHEREUM_CHAIN_ID: ChainId = 1;
const DARWINIA_CHAIN_ID: ChainId = 46;

/// Every compiled-in descriptor, in registration order.
pub(crate) fn builtin_chains() -> Vec<ChainDescriptor> {
    vec![ethereum(), darwinia()]
}

fn ethereum() -> ChainDescriptor {
    ChainDescriptor {
        id: ETHEREUM_CHAIN_ID,
        name: "Ethereum".to_string(),
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
        rpc_urls: vec![builtin_url("https://eth.merkle.io")],
        block_explorer_urls: vec![builtin_url("https://etherscan.io")],
        testnet: false,
    }
}

fn darwinia() -> ChainDescriptor {
    ChainDescriptor {
        id: DARWINIA_CHAIN_ID,
        name: "Darwinia Network".to_string(),
        native_currency: NativeCurrency {
            name: "RING".to_string(),
            symbol: "RING".to_string(),
            decimals: 18,
        },
        rpc_urls: vec![builtin_url("https://rpc.darwinia.network")],
        block_explorer_urls: vec![builtin_url("https://explorer.darwinia.network")],
        testnet: false,
    }
}

fn builtin_url(s: &str) -> Url {
    Url::parse(s).expect("builtin catalog URLs are well-formed")
}
