//! gridpath-core: jump-point-search pathfinding on uniform-cost grids.
//!
//! Eight-directional movement, orthogonal steps cost 1 and diagonal steps
//! cost sqrt(2). The search expands only jump points, then interpolates the
//! dense cell-by-cell path for the caller.

pub mod astar;
pub mod cost;
pub mod grid;
pub mod jps;
pub mod models;
pub mod movement;
pub mod options;
pub mod path;
pub mod queue;

pub use astar::{find_path, Searcher};
pub use grid::{coord_by_width, index_by_width, Grid};
pub use models::{Cell, PathResult, NO_NODE};
pub use options::SearchOptions;

/// Returns the crate version for basic linkage diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_non_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn exports_available() {
        let grid = Grid::open(2, 2).unwrap();
        let opts = SearchOptions::default();
        let res = find_path(&grid, 0, 3, &opts);
        assert!(res.path.is_some());
    }
}
