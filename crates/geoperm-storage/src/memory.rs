//! In-memory registry implementation.
//!
//! A `HashMap` behind one `std::sync::Mutex`. Every operation, reads
//! included, takes the same exclusive lock for its full duration: the
//! registry is single-accessor-at-a-time by contract, not
//! reader/writer-optimized. Critical sections are a handful of map
//! operations; nothing awaits while the lock is held.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use geoperm_domain::Distributor;

use crate::error::{StorageError, StorageResult};
use crate::traits::Registry;

/// In-memory implementation of [`Registry`].
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    distributors: Mutex<HashMap<String, Distributor>>,
}

impl MemoryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new registry wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, Distributor>>> {
        self.distributors
            .lock()
            .map_err(|e| StorageError::Internal {
                message: format!("registry lock poisoned: {}", e),
            })
    }
}

#[async_trait]
impl Registry for MemoryRegistry {
    async fn add_distributor(&self, distributor: Distributor) -> StorageResult<()> {
        let mut map = self.lock()?;
        map.insert(distributor.name.clone(), distributor);
        Ok(())
    }

    async fn set_permissions(
        &self,
        name: &str,
        includes: Vec<String>,
        excludes: Vec<String>,
    ) -> StorageResult<()> {
        let mut map = self.lock()?;
        let entry = map
            .get_mut(name)
            .ok_or_else(|| StorageError::DistributorNotFound {
                name: name.to_string(),
            })?;
        entry.includes = includes;
        entry.excludes = excludes;
        Ok(())
    }

    async fn get_distributor(&self, name: &str) -> StorageResult<Distributor> {
        let map = self.lock()?;
        map.get(name)
            .cloned()
            .ok_or_else(|| StorageError::DistributorNotFound {
                name: name.to_string(),
            })
    }
}
