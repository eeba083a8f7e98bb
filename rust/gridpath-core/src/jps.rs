//! Jump-point expansion: neighbour pruning, forced-neighbour detection and
//! the jump scans that skip over cells no optimal path needs to visit.
//!
//! On a uniform grid, many paths are permutations of the same moves. The
//! expander breaks that symmetry: from a node it only considers directions
//! that are optimal turns relative to the arrival direction, and along each
//! it scans until it hits a wall, the goal, or a cell whose surroundings
//! force a decision (a jump point). Only those cells reach the open queue.

use crate::grid::Grid;
use crate::models::{Cell, NO_NODE};
use crate::movement::{dir_mod8, is_diagonal, step, Direction};

pub struct JpsExpander<'a> {
    grid: &'a Grid,
    goal: i32,
}

impl<'a> JpsExpander<'a> {
    pub fn new(grid: &'a Grid, goal: i32) -> Self {
        Self { grid, goal }
    }

    /// Walkability of the cell one step from `c` in direction `dir + turn`.
    #[inline]
    fn enterable(&self, c: Cell, dir: Direction, turn: i32) -> bool {
        self.grid.is_walkable(step(c, dir as i32 + turn))
    }

    /// Does `c`, entered along `dir`, have a neighbour that can only be
    /// reached optimally through `c`?
    ///
    /// A side-adjacent cell is forced when it is walkable while the cell
    /// that would normally route around it is blocked; both sides of the
    /// travel axis are checked. The probe offsets differ between straight
    /// entries (+-1 against +-2) and diagonal entries (+-2 against +-3).
    pub fn has_forced_neighbours(&self, c: Cell, dir: Direction) -> bool {
        if is_diagonal(dir) {
            !implies(self.enterable(c, dir, -2), self.enterable(c, dir, -3))
                || !implies(self.enterable(c, dir, 2), self.enterable(c, dir, 3))
        } else {
            !implies(self.enterable(c, dir, -1), self.enterable(c, dir, -2))
                || !implies(self.enterable(c, dir, 1), self.enterable(c, dir, 2))
        }
    }

    /// Scan from `from` along `dir` and return the next node worth
    /// enqueueing: the goal, a cell with forced neighbours, or (diagonally)
    /// a cell from which a straight scan reaches one of those. `NO_NODE`
    /// when the ray dies against a wall or the map edge.
    pub fn jump(&self, dir: Direction, from: i32) -> i32 {
        if is_diagonal(dir) {
            self.jump_diagonal(dir, from)
        } else {
            self.jump_straight(dir, from)
        }
    }

    fn jump_straight(&self, dir: Direction, from: i32) -> i32 {
        let mut c = self.grid.cell_of(from);
        loop {
            let next = step(c, dir as i32);
            if !self.grid.is_walkable(next) {
                return NO_NODE;
            }
            let node = self.grid.index_of(next);
            if node == self.goal || self.has_forced_neighbours(next, dir) {
                return node;
            }
            c = next;
        }
    }

    fn jump_diagonal(&self, dir: Direction, from: i32) -> i32 {
        let mut c = self.grid.cell_of(from);
        loop {
            let next = step(c, dir as i32);
            if !self.grid.is_walkable(next) {
                return NO_NODE;
            }
            let node = self.grid.index_of(next);
            if node == self.goal || self.has_forced_neighbours(next, dir) {
                return node;
            }
            // A jump point reachable straight off this diagonal makes the
            // diagonal cell itself the decision point.
            if self.jump_straight(dir_mod8(dir as i32 - 1), node) != NO_NODE
                || self.jump_straight(dir_mod8(dir as i32 + 1), node) != NO_NODE
            {
                return node;
            }
            c = next;
        }
    }
}

/// Is `dir` an optimal turn out of a node entered along `from_dir`?
///
/// Everything is permitted from the start (`None`). Otherwise the forward
/// cone: the arrival direction itself, plus two neighbours per side for a
/// diagonal arrival or one per side for a straight one.
pub fn is_optimal_turn(dir: Direction, from_dir: Option<Direction>) -> bool {
    let Some(from) = from_dir else {
        return true;
    };
    if from == dir {
        return true;
    }
    let f = from as i32;
    if is_diagonal(from) {
        dir == dir_mod8(f - 2)
            || dir == dir_mod8(f - 1)
            || dir == dir_mod8(f + 1)
            || dir == dir_mod8(f + 2)
    } else {
        dir == dir_mod8(f - 1) || dir == dir_mod8(f + 1)
    }
}

#[inline]
fn implies(a: bool, b: bool) -> bool {
    !a || b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::{EAST, NORTH, NORTHEAST, NORTHWEST, SOUTH, SOUTHEAST, SOUTHWEST, WEST};

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let cells = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| u8::from(b == b'.')))
            .collect();
        Grid::new(width, height, cells).unwrap()
    }

    #[test]
    fn optimal_turns_from_start_allow_everything() {
        for m in crate::movement::MOVEMENT_ORDER.iter() {
            assert!(is_optimal_turn(m.dir, None));
        }
    }

    #[test]
    fn straight_arrival_permits_cone_of_three() {
        let permitted: Vec<Direction> = crate::movement::MOVEMENT_ORDER
            .iter()
            .map(|m| m.dir)
            .filter(|&d| is_optimal_turn(d, Some(EAST.dir)))
            .collect();
        assert_eq!(permitted, vec![NORTHEAST.dir, EAST.dir, SOUTHEAST.dir]);
    }

    #[test]
    fn diagonal_arrival_permits_cone_of_five() {
        let permitted: Vec<Direction> = crate::movement::MOVEMENT_ORDER
            .iter()
            .map(|m| m.dir)
            .filter(|&d| is_optimal_turn(d, Some(NORTHWEST.dir)))
            .collect();
        // The cone wraps past zero: north and northeast stay permitted.
        assert_eq!(
            permitted,
            vec![NORTH.dir, NORTHEAST.dir, SOUTHWEST.dir, WEST.dir, NORTHWEST.dir]
        );
        assert!(!is_optimal_turn(SOUTH.dir, Some(NORTHWEST.dir)));
        assert!(!is_optimal_turn(SOUTHEAST.dir, Some(NORTHWEST.dir)));
    }

    #[test]
    fn wall_end_creates_forced_neighbour() {
        // Moving east along y=1 under the wall: at (2,1) the cell north is
        // still blocked while the northeast one is open, so (3,0) is only
        // reachable optimally through (2,1).
        let g = grid_from_rows(&[
            "###..", //
            ".....", //
            ".....",
        ]);
        let x = JpsExpander::new(&g, g.index_of([4, 1]));
        assert!(x.has_forced_neighbours([2, 1], EAST.dir));
        // Mid-wall the diagonal is blocked too; past the wall nothing forces.
        assert!(!x.has_forced_neighbours([1, 1], EAST.dir));
        assert!(!x.has_forced_neighbours([3, 1], EAST.dir));
    }

    #[test]
    fn open_grid_has_no_forced_neighbours() {
        let g = Grid::open(5, 5).unwrap();
        let x = JpsExpander::new(&g, g.index_of([4, 4]));
        for m in crate::movement::MOVEMENT_ORDER.iter() {
            assert!(!x.has_forced_neighbours([2, 2], m.dir));
        }
    }

    #[test]
    fn straight_jump_stops_at_goal_wall_or_jump_point() {
        let g = grid_from_rows(&[
            "......", //
            "......", //
            "......",
        ]);
        let x = JpsExpander::new(&g, g.index_of([4, 1]));
        // Goal on the ray.
        assert_eq!(x.jump(EAST.dir, g.index_of([0, 1])), g.index_of([4, 1]));
        // Ray dies at the map edge.
        assert_eq!(x.jump(WEST.dir, g.index_of([0, 1])), NO_NODE);
        assert_eq!(x.jump(NORTH.dir, g.index_of([3, 0])), NO_NODE);

        let walled = grid_from_rows(&[
            "###...", //
            "......", //
            "......",
        ]);
        let x2 = JpsExpander::new(&walled, walled.index_of([5, 2]));
        // Scan along y=1 must stop under the wall end at x=2.
        assert_eq!(
            x2.jump(EAST.dir, walled.index_of([0, 1])),
            walled.index_of([2, 1])
        );
    }

    #[test]
    fn diagonal_jump_stops_when_straight_scan_hits_something() {
        let g = grid_from_rows(&[
            "......", //
            "......", //
            "####..", //
            "......",
        ]);
        // Heading southeast from (3,0): the south-component scan out of
        // (4,1) finds a jump point beside the wall, so the diagonal stops.
        let x = JpsExpander::new(&g, g.index_of([5, 3]));
        let jp = x.jump(SOUTHEAST.dir, g.index_of([3, 0]));
        assert_eq!(jp, g.index_of([4, 1]));
    }

    #[test]
    fn jump_lands_on_goal_across_open_diagonal() {
        let g = Grid::open(6, 6).unwrap();
        let x = JpsExpander::new(&g, g.index_of([5, 5]));
        assert_eq!(x.jump(SOUTHEAST.dir, g.index_of([0, 0])), g.index_of([5, 5]));
        assert_eq!(x.jump(SOUTHWEST.dir, g.index_of([5, 0])), NO_NODE);
    }
}
