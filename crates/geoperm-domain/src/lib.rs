//! geoperm-domain: Core permission domain logic
//!
//! This crate contains the core logic of the distributor permission
//! service:
//! - Distributor model (name + include/exclude region tokens)
//! - Permission evaluation (exclude-first, suffix-based matching)
//! - Region code table loaded from CSV at startup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               geoperm-domain                 │
//! ├─────────────────────────────────────────────┤
//! │  distributor.rs - Distributor model         │
//! │  evaluate.rs    - Permission evaluation     │
//! │  regions.rs     - Region code table (CSV)   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod distributor;
pub mod error;
pub mod evaluate;
pub mod regions;

// Re-export commonly used types at the crate root
pub use distributor::Distributor;
pub use error::{DomainError, DomainResult};
pub use evaluate::{evaluate, token_matches, Decision};
pub use regions::{RegionTable, RegionTableLoad};
