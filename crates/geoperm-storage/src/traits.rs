//! Registry trait definition.

use async_trait::async_trait;

use geoperm_domain::Distributor;

use crate::error::StorageResult;

/// Abstract registry of distributors and their permission rules.
///
/// Implementations must be thread-safe (Send + Sync); the registry is
/// shared across all request handlers. There is no delete operation —
/// distributors live for the life of the process.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Inserts a distributor, unconditionally replacing any existing
    /// entry with the same name. Never fails on its own.
    async fn add_distributor(&self, distributor: Distributor) -> StorageResult<()>;

    /// Replaces both rule lists of an existing distributor. The lists
    /// are swapped wholesale, never merged with the previous values.
    ///
    /// Fails with [`StorageError::DistributorNotFound`] if no entry
    /// exists for `name`, leaving the registry untouched.
    async fn set_permissions(
        &self,
        name: &str,
        includes: Vec<String>,
        excludes: Vec<String>,
    ) -> StorageResult<()>;

    /// Returns the distributor with the given name, or
    /// [`StorageError::DistributorNotFound`].
    async fn get_distributor(&self, name: &str) -> StorageResult<Distributor>;
}
