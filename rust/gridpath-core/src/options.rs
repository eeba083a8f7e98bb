use serde::{Deserialize, Serialize};

/// High enough that benchmark-sized maps never hit it; the budget exists so
/// a caller can bound the cost of a single query.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Abort with reason `expansion-limit` after finalizing this many nodes.
    pub max_expansions: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: DEFAULT_MAX_EXPANSIONS }
    }
}
