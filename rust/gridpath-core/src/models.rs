use serde::{Deserialize, Serialize};

/// An `(x, y)` grid coordinate. Rows run top-to-bottom, so north is `y - 1`.
pub type Cell = [i32; 2];

/// Sentinel node id meaning "no node": the predecessor of the start cell,
/// and the result of a jump scan that found nothing.
pub const NO_NODE: i32 = -1;

/// Outcome of a single path query.
///
/// `path` holds linear cell indices ordered goal-first with the start cell
/// excluded. Every failure collapses to `path: None` plus a `reason` string
/// (`invalid-query`, `no-path`, `expansion-limit`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Option<Vec<i32>>,
    pub cost: f64,
    pub expanded: u64,
    pub reason: Option<String>,
}

impl PathResult {
    pub fn found(path: Vec<i32>, cost: f64, expanded: u64) -> Self {
        Self { path: Some(path), cost, expanded, reason: None }
    }

    pub fn not_found(reason: &str, expanded: u64) -> Self {
        Self { path: None, cost: 0.0, expanded, reason: Some(reason.to_string()) }
    }

    /// Path length in cells, or `-1` when no path was found.
    pub fn len_or_sentinel(&self) -> i64 {
        self.path.as_ref().map(|p| p.len() as i64).unwrap_or(-1)
    }
}
