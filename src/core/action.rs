//! Action representation.
//!
//! One variant per action kind, each carrying exactly the fields it needs.
//! The serde form is the bot wire format:
//!
//! ```
//! use river_stones::core::{Action, Coord};
//!
//! let json = r#"{"action":"push","from":[3,4],"to":[3,5],"pushed_to":[3,6]}"#;
//! let action: Action = serde_json::from_str(json).unwrap();
//! assert_eq!(
//!     action,
//!     Action::Push { from: Coord::new(3, 4), to: Coord::new(3, 5), pushed_to: Coord::new(3, 6) }
//! );
//! ```

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::piece::Orientation;
use super::side::Side;

/// A proposed action for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Step (or ride river flow) into an empty cell.
    Move { from: Coord, to: Coord },

    /// Displace the piece at `to` into `pushed_to`, taking its cell.
    Push {
        from: Coord,
        to: Coord,
        pushed_to: Coord,
    },

    /// Stone -> river (orientation required) or river -> stone (no orientation).
    Flip {
        from: Coord,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        orientation: Option<Orientation>,
    },

    /// Toggle a river's orientation.
    Rotate { from: Coord },
}

impl Action {
    /// The acting piece's cell.
    #[must_use]
    pub const fn origin(&self) -> Coord {
        match *self {
            Action::Move { from, .. }
            | Action::Push { from, .. }
            | Action::Flip { from, .. }
            | Action::Rotate { from } => from,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::Push { .. } => ActionKind::Push,
            Action::Flip { .. } => ActionKind::Flip,
            Action::Rotate { .. } => ActionKind::Rotate,
        }
    }
}

/// Action kind without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Push,
    Flip,
    Rotate,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionKind::Move => "move",
            ActionKind::Push => "push",
            ActionKind::Flip => "flip",
            ActionKind::Rotate => "rotate",
        })
    }
}

/// An accepted action with the side that took it.
///
/// Used for game history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Position in the game's accepted-action sequence (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: Action, sequence: u32) -> Self {
        Self {
            side,
            action,
            sequence,
        }
    }
}
