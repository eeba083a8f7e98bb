//! Best-first outer loop driving the jump-point expander.

use tracing::debug;

use crate::cost::{estimate_distance, precise_distance};
use crate::grid::Grid;
use crate::jps::{is_optimal_turn, JpsExpander};
use crate::models::{PathResult, NO_NODE};
use crate::movement::{direction_of_move, MOVEMENT_ORDER};
use crate::options::SearchOptions;
use crate::path::interpolate;
use crate::queue::IndexedQueue;

/// Per-query scratch, sized `width * height`. Owned by a [`Searcher`] so
/// repeated queries over same-sized grids reuse the allocations.
struct SearchWorkspace {
    g_score: Vec<f64>,
    came_from: Vec<i32>,
    closed: Vec<bool>,
    open: IndexedQueue,
}

impl SearchWorkspace {
    fn new() -> Self {
        Self {
            g_score: Vec::new(),
            came_from: Vec::new(),
            closed: Vec::new(),
            open: IndexedQueue::new(0),
        }
    }

    fn reset(&mut self, size: usize) {
        if self.g_score.len() == size {
            self.closed.fill(false);
            self.open.clear();
        } else {
            self.g_score.clear();
            self.g_score.resize(size, 0.0);
            self.came_from.clear();
            self.came_from.resize(size, NO_NODE);
            self.closed.clear();
            self.closed.resize(size, false);
            self.open.reset_universe(size);
        }
    }
}

/// A reusable JPS searcher. One query at a time; the scratch arrays stay
/// allocated between calls.
pub struct Searcher {
    workspace: SearchWorkspace,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self { workspace: SearchWorkspace::new() }
    }

    /// Shortest path from `start` to `goal` (linear indices) on `grid`.
    ///
    /// The result path is goal-first with the start excluded. Every failure
    /// kind collapses to `path: None` with a reason, per the query contract.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: i32,
        goal: i32,
        options: &SearchOptions,
    ) -> PathResult {
        if !grid.contains_index(start) || !grid.contains_index(goal) {
            return PathResult::not_found("invalid-query", 0);
        }

        let ws = &mut self.workspace;
        ws.reset(grid.len());

        let start_cell = grid.cell_of(start);
        let goal_cell = grid.cell_of(goal);
        debug!(?start_cell, ?goal_cell, "grid query");

        ws.g_score[start as usize] = 0.0;
        ws.came_from[start as usize] = NO_NODE;
        ws.open.insert(start as u32, estimate_distance(start_cell, goal_cell));

        let expander = JpsExpander::new(grid, goal);
        let mut expanded: u64 = 0;

        while let Some((node, _)) = ws.open.find_min() {
            let node = node as i32;
            let node_cell = grid.cell_of(node);
            if node_cell == goal_cell {
                let path = interpolate(grid, &ws.came_from, start, goal);
                let cost = ws.g_score[goal as usize];
                debug!(expanded, cost, "path found");
                return PathResult::found(path, cost, expanded);
            }

            ws.open.delete_min();
            ws.closed[node as usize] = true;
            expanded += 1;
            if expanded > options.max_expansions {
                return PathResult::not_found("expansion-limit", expanded);
            }

            let from_dir = match ws.came_from[node as usize] {
                NO_NODE => None,
                prev => direction_of_move(grid.cell_of(prev), node_cell),
            };

            for m in MOVEMENT_ORDER.iter() {
                if !is_optimal_turn(m.dir, from_dir) {
                    continue;
                }
                let s = expander.jump(m.dir, node);
                if s == NO_NODE {
                    continue;
                }
                if ws.closed[s as usize] {
                    continue;
                }

                let s_cell = grid.cell_of(s);
                let tentative = ws.g_score[node as usize] + precise_distance(node_cell, s_cell);
                if !ws.open.exists(s as u32) {
                    ws.came_from[s as usize] = node;
                    ws.g_score[s as usize] = tentative;
                    ws.open
                        .insert(s as u32, tentative + estimate_distance(s_cell, goal_cell));
                } else if tentative < ws.g_score[s as usize] {
                    ws.came_from[s as usize] = node;
                    ws.g_score[s as usize] = tentative;
                    ws.open
                        .change_priority(s as u32, tentative + estimate_distance(s_cell, goal_cell));
                }
            }
        }

        debug!(expanded, "open set exhausted");
        PathResult::not_found("no-path", expanded)
    }
}

/// One-shot convenience over a fresh [`Searcher`].
pub fn find_path(grid: &Grid, start: i32, goal: i32, options: &SearchOptions) -> PathResult {
    Searcher::new().find_path(grid, start, goal, options)
}
