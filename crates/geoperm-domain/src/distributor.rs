//! Distributor model.

use serde::{Deserialize, Serialize};

/// A named entity with an access rule set over geographic regions.
///
/// `includes` and `excludes` are ordered lists of region tokens —
/// dash-joined hierarchical strings with finer granularity first
/// (e.g. `CHENNAI-TAMILNADU-INDIA`). A bare country token like `INDIA`
/// covers every region string that ends with it.
///
/// The `name` is the unique registry key and is immutable once the
/// distributor is created; permission updates replace both lists
/// wholesale, never merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub name: String,
    /// Region tokens granting permission.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Region tokens denying permission. Always evaluated before
    /// `includes`.
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl Distributor {
    /// Creates a distributor with empty rule lists.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}
