//! Unified error types for the chain registry.

use thiserror::Error;

/// Errors raised when the compiled-in catalog cannot satisfy a query.
///
/// Both variants indicate a build or deployment misconfiguration, not a
/// recoverable runtime condition. The registry never catches or retries them;
/// callers are expected to fail fast, typically at application boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The catalog holds no chain configurations at all.
    #[error("No suitable chain configurations are available.")]
    NoChains,

    /// No default chain could be resolved because the catalog is empty.
    #[error("No suitable chain configurations are available for the current deployment mode.")]
    NoDefaultChain,
}
