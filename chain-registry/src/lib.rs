//! Static chain-configuration registry for wallet connection.
//!
//! The set of supported blockchain networks is compiled in; this crate holds
//! their metadata (chain id, display name, native currency, RPC and block
//! explorer endpoints) and exposes pure query operations over the catalog:
//!
//! - [`chains`] — every supported chain, in registration order.
//! - [`chain_by_id`] — lookup by numeric chain id; absence is a normal outcome.
//! - [`default_chain`] / [`default_chain_id`] — default-chain resolution,
//!   falling back to the first registered chain.
//! - [`is_supported_chain`] — membership check.
//!
//! There is no network I/O anywhere: the catalog is read-only process state
//! built once on first use, and every query completes in constant time.

mod catalog;
mod chain;
mod error;
mod registry;

pub use self::catalog::DEFAULT_CHAIN_ID;
pub use self::chain::{AddChainParams, ChainDescriptor, ChainId, NativeCurrency};
pub use self::error::Error;
pub use self::registry::{
    ChainRegistry, chain_by_id, chains, default_chain, default_chain_id, is_supported_chain,
};
