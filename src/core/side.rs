//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players. `Circle` scores on row 2 (near the top of the board) and
//! starts at the bottom; `Square` scores on row `rows - 3` and starts at the top.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for scores, clocks and
//! per-side counters.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// First side (`SideA`). Owns the row-2 score cells.
    Circle,
    /// Second side (`SideB`). Owns the `rows - 3` score cells.
    Square,
}

impl Side {
    /// Both sides, Circle first.
    pub const ALL: [Side; 2] = [Side::Circle, Side::Square];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Circle => Side::Square,
            Side::Square => Side::Circle,
        }
    }

    /// Slot index (Circle = 0, Square = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Circle => 0,
            Side::Square => 1,
        }
    }

    /// Wire name used by bots and board files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Circle => "circle",
            Side::Square => "square",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(Side::Circle),
            "square" => Some(Side::Square),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use river_stones::core::{Side, SideMap};
///
/// let mut clocks: SideMap<f64> = SideMap::with_value(60.0);
/// clocks[Side::Square] -= 12.5;
///
/// assert_eq!(clocks[Side::Circle], 60.0);
/// assert_eq!(clocks[Side::Square], 47.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub circle: T,
    pub square: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values.
    pub const fn new(circle: T, square: T) -> Self {
        Self { circle, square }
    }

    /// Create a map from a factory called once per side.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            circle: factory(Side::Circle),
            square: factory(Side::Square),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            circle: value.clone(),
            square: value,
        }
    }

    /// Get a side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Circle => &self.circle,
            Side::Square => &self.square,
        }
    }

    /// Get a mutable reference to a side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Circle => &mut self.circle,
            Side::Square => &mut self.square,
        }
    }

    /// Iterate over (Side, &T) pairs, Circle first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Circle, &self.circle), (Side::Square, &self.square)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
