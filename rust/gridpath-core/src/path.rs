//! Jump-point chain to dense path interpolation.
//!
//! The search links only jump points, but callers expect every grid step.
//! Consecutive jump points always sit on a single straight or diagonal ray,
//! so walking one cell at a time toward a sliding target reproduces the
//! exact cells the search skipped over.

use crate::grid::Grid;
use crate::models::{Cell, NO_NODE};

/// Materialize the dense path for a finished query: goal-first, start
/// excluded. `came_from` must hold the predecessor chain rooted at `start`
/// with `came_from[start] == NO_NODE`.
pub fn interpolate(grid: &Grid, came_from: &[i32], start: i32, goal: i32) -> Vec<i32> {
    #[inline]
    fn one_step_toward(c: Cell, t: Cell) -> Cell {
        [c[0] + (t[0] - c[0]).signum(), c[1] + (t[1] - c[1]).signum()]
    }

    let start_cell = grid.cell_of(start);
    let mut path = Vec::new();
    let mut target = goal;
    let mut cur = grid.cell_of(goal);

    loop {
        cur = one_step_toward(cur, grid.cell_of(target));
        path.push(grid.index_of(cur));
        if grid.index_of(cur) == target {
            target = came_from[target as usize];
        }
        if cur == start_cell {
            break;
        }
        if target == NO_NODE {
            // Chain exhausted away from the start; nothing sane to emit.
            break;
        }
    }

    // The walk lands on the start last; the emitted path excludes it.
    path.pop();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_cells_between_jump_points() {
        let g = Grid::open(5, 5).unwrap();
        // Chain: start (0,0) -> jump point (3,3) -> goal (3,0), i.e. one
        // diagonal ray followed by one straight ray.
        let start = g.index_of([0, 0]);
        let mid = g.index_of([3, 3]);
        let goal = g.index_of([3, 0]);
        let mut came_from = vec![NO_NODE; g.len()];
        came_from[mid as usize] = start;
        came_from[goal as usize] = mid;

        let path = interpolate(&g, &came_from, start, goal);
        let cells: Vec<_> = path.iter().map(|&i| g.cell_of(i)).collect();
        assert_eq!(
            cells,
            vec![[3, 0], [3, 1], [3, 2], [3, 3], [2, 2], [1, 1]]
        );
    }

    #[test]
    fn adjacent_chain_is_goal_only() {
        let g = Grid::open(3, 3).unwrap();
        let start = g.index_of([1, 1]);
        let goal = g.index_of([2, 1]);
        let mut came_from = vec![NO_NODE; g.len()];
        came_from[goal as usize] = start;

        let path = interpolate(&g, &came_from, start, goal);
        assert_eq!(path, vec![goal]);
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let g = Grid::open(2, 2).unwrap();
        let start = g.index_of([1, 0]);
        let came_from = vec![NO_NODE; g.len()];
        assert!(interpolate(&g, &came_from, start, start).is_empty());
    }
}
