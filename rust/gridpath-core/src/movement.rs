//! Compass directions and the modular arithmetic over them.
//!
//! Directions are numbered 0..7 clockwise from north; odd numbers are the
//! diagonals. Rows run top-to-bottom, so north decreases `y`.

use crate::models::Cell;

pub type Direction = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    pub name: &'static str,
    pub dir: Direction,
    pub dx: i32,
    pub dy: i32,
}

pub const NORTH: Movement = Movement { name: "north", dir: 0, dx: 0, dy: -1 };
pub const NORTHEAST: Movement = Movement { name: "northeast", dir: 1, dx: 1, dy: -1 };
pub const EAST: Movement = Movement { name: "east", dir: 2, dx: 1, dy: 0 };
pub const SOUTHEAST: Movement = Movement { name: "southeast", dir: 3, dx: 1, dy: 1 };
pub const SOUTH: Movement = Movement { name: "south", dir: 4, dx: 0, dy: 1 };
pub const SOUTHWEST: Movement = Movement { name: "southwest", dir: 5, dx: -1, dy: 1 };
pub const WEST: Movement = Movement { name: "west", dir: 6, dx: -1, dy: 0 };
pub const NORTHWEST: Movement = Movement { name: "northwest", dir: 7, dx: -1, dy: -1 };

// Clockwise from north; the array index equals the direction number.
pub const MOVEMENT_ORDER: [Movement; 8] = [
    NORTH, NORTHEAST, EAST, SOUTHEAST, SOUTH, SOUTHWEST, WEST, NORTHWEST,
];

/// Non-negative direction arithmetic. Signed `%` would hand back negative
/// remainders for turns like `dir - 2`, which must wrap to 6..7 instead.
#[inline]
pub fn dir_mod8(d: i32) -> Direction {
    (((d % 8) + 8) % 8) as Direction
}

#[inline]
pub fn is_diagonal(d: Direction) -> bool {
    d % 2 != 0
}

/// The cell one tile away in the given (possibly unnormalized) direction.
#[inline]
pub fn step(c: Cell, d: i32) -> Cell {
    let m = &MOVEMENT_ORDER[dir_mod8(d) as usize];
    [c[0] + m.dx, c[1] + m.dy]
}

/// Direction of travel `from -> to`, or `None` when the cells coincide.
///
/// Only the per-axis signs matter, so this is exact for any two cells on a
/// shared straight or diagonal ray, which is all the search ever asks about.
pub fn direction_of_move(from: Cell, to: Cell) -> Option<Direction> {
    let d = match ((to[0] - from[0]).signum(), (to[1] - from[1]).signum()) {
        (0, 0) => return None,
        (0, -1) => NORTH,
        (1, -1) => NORTHEAST,
        (1, 0) => EAST,
        (1, 1) => SOUTHEAST,
        (0, 1) => SOUTH,
        (-1, 1) => SOUTHWEST,
        (-1, 0) => WEST,
        (-1, -1) => NORTHWEST,
        _ => unreachable!(),
    };
    Some(d.dir)
}
