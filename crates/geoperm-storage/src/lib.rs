//! geoperm-storage: Registry abstraction layer
//!
//! This crate provides the distributor registry for geoperm:
//! - Registry trait for registry operations
//! - In-memory implementation guarded by a single exclusive lock
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              geoperm-storage                 │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs   - Registry trait definition    │
//! │  memory.rs   - In-memory implementation     │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use memory::MemoryRegistry;
pub use traits::Registry;
