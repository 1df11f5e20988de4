//! Chain registry and query operations.
//!
//! [`ChainRegistry`] is an immutable, ordered catalog of [`ChainDescriptor`]
//! entries. A process-wide instance over the compiled-in catalog backs the
//! free query functions ([`chains`], [`chain_by_id`], [`default_chain`],
//! [`default_chain_id`], [`is_supported_chain`]), which are the public surface
//! consumed by the application.

use std::sync::LazyLock;

use tracing::debug;

use crate::catalog;
use crate::chain::{ChainDescriptor, ChainId};
use crate::error::Error;

/// Immutable, ordered catalog of supported chains.
///
/// Descriptors keep their registration order. The registry is never mutated
/// after construction, so every operation is a pure read and concurrent
/// callers need no coordination.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<ChainDescriptor>,
    default_id: ChainId,
}

impl ChainRegistry {
    /// Creates a registry over the given descriptors.
    ///
    /// `default_id` designates the preferred default chain. It does not have
    /// to match a descriptor: default resolution falls back to the first
    /// registered entry when it is absent.
    #[must_use]
    pub const fn new(chains: Vec<ChainDescriptor>, default_id: ChainId) -> Self {
        Self { chains, default_id }
    }

    /// All descriptors, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoChains`] if the registry holds no descriptors.
    /// The builtin registry is never empty, so for it this is a defensive
    /// invariant check rather than an expected path.
    pub fn chains(&self) -> Result<&[ChainDescriptor], Error> {
        if self.chains.is_empty() {
            return Err(Error::NoChains);
        }
        Ok(&self.chains)
    }

    /// Looks up a descriptor by chain id.
    ///
    /// An unmatched id yields `None` rather than an error. `None` and zero
    /// both mean "no lookup performed".
    #[must_use]
    pub fn chain_by_id(&self, id: Option<ChainId>) -> Option<&ChainDescriptor> {
        match id {
            None | Some(0) => None,
            Some(id) => self.chains.iter().find(|chain| chain.id == id),
        }
    }

    /// Resolves the default chain.
    ///
    /// Prefers the descriptor matching the designated default id; when that id
    /// is not registered, falls back to the first descriptor in registration
    /// order. The preference order is significant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDefaultChain`] if the registry holds no descriptors.
    pub fn default_chain(&self) -> Result<&ChainDescriptor, Error> {
        let first = self.chains.first().ok_or(Error::NoDefaultChain)?;
        Ok(self
            .chains
            .iter()
            .find(|chain| chain.id == self.default_id)
            .unwrap_or(first))
    }

    /// Chain id of [`Self::default_chain`].
    ///
    /// # Errors
    ///
    /// Propagates [`Self::default_chain`]'s failure unchanged.
    pub fn default_chain_id(&self) -> Result<ChainId, Error> {
        Ok(self.default_chain()?.id)
    }

    /// Whether a descriptor with the given id is registered.
    #[must_use]
    pub fn is_supported(&self, id: ChainId) -> bool {
        self.chains.iter().any(|chain| chain.id == id)
    }
}

static REGISTRY: LazyLock<ChainRegistry> = LazyLock::new(|| {
    let registry = ChainRegistry::new(catalog::builtin_chains(), catalog::DEFAULT_CHAIN_ID);
    debug!(
        chains = registry.chains.len(),
        default_id = registry.default_id,
        "builtin chain registry initialised"
    );
    registry
});

/// All supported chain configurations, in registration order.
///
/// # Errors
///
/// Returns [`Error::NoChains`] if the builtin catalog is empty, which would
/// indicate a build misconfiguration.
pub fn chains() -> Result<&'static [ChainDescriptor], Error> {
    REGISTRY.chains()
}

/// Looks up a supported chain by id; `None` and zero yield no match.
#[must_use]
pub fn chain_by_id(id: Option<ChainId>) -> Option<&'static ChainDescriptor> {
    REGISTRY.chain_by_id(id)
}

/// The default chain configuration.
///
/// # Errors
///
/// Returns [`Error::NoDefaultChain`] if the builtin catalog is empty.
pub fn default_chain() -> Result<&'static ChainDescriptor, Error> {
    REGISTRY.default_chain()
}

/// Chain id of [`default_chain`].
///
/// # Errors
///
/// Propagates [`default_chain`]'s failure unchanged.
pub fn default_chain_id() -> Result<ChainId, Error> {
    REGISTRY.default_chain_id()
}

/// Whether the given chain id is supported.
#[must_use]
pub fn is_supported_chain(id: ChainId) -> bool {
    REGISTRY.is_supported(id)
}
