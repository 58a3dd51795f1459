//! Board coordinates and cardinal directions.
//!
//! Coordinates are `(x, y)`: `x` is the column, `y` the row, both 0-based.
//! They are signed so that a caller-supplied coordinate outside the board can
//! be represented and rejected rather than wrapped.
//!
//! ```
//! use river_stones::core::{Coord, Direction};
//!
//! let c = Coord::new(3, 5);
//! assert_eq!(c.step(Direction::East), Coord::new(4, 5));
//! assert_eq!(c.step(Direction::North), Coord::new(3, 4));
//! ```

use serde::{Deserialize, Serialize};

/// A cell position on the board.
///
/// Serialized as a two-element array `[x, y]`, matching the action wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate in `dir` (may be off the board).
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Neighbor scan order used by move generation.
    pub const CARDINALS: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// `(dx, dy)` offset. South is increasing `y`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}
