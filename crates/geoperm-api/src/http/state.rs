//! Application state for HTTP handlers.

use std::sync::Arc;

use geoperm_domain::RegionTable;
use geoperm_storage::Registry;

/// Application state shared across all HTTP handlers.
///
/// Holds the distributor registry and the read-only region code table.
/// The registry is generic over [`Registry`] so tests (and any future
/// backend) can inject their own instance instead of reaching for
/// process-wide globals.
#[derive(Clone)]
pub struct AppState<R: Registry> {
    /// The distributor registry.
    pub registry: Arc<R>,
    /// Region code table, populated before the server starts and
    /// immutable afterwards.
    pub regions: Arc<RegionTable>,
}

impl<R: Registry> AppState<R> {
    /// Creates a new application state.
    pub fn new(registry: Arc<R>, regions: Arc<RegionTable>) -> Self {
        Self { registry, regions }
    }
}
