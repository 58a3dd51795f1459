//! Error types.
//!
//! `ActionError` is the rejection taxonomy for proposed actions. A rejected
//! action never mutates the board. `BoardError` covers building or decoding
//! boards, and `GameError` is what `GameState` returns.

use crate::core::{ActionKind, Coord, PieceKind, Side};

/// Why a proposed action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    #[error("no {side} piece at {at}")]
    NotYourPiece { at: Coord, side: Side },

    #[error("cell {at} must be {expected}")]
    OccupancyMismatch { at: Coord, expected: Occupancy },

    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Coord, to: Coord },

    #[error("flipping the stone at {0} to a river needs an orientation")]
    MissingOrientation(Coord),

    #[error("{action} cannot be performed by a {kind} at {at}")]
    WrongPieceKindForAction {
        action: ActionKind,
        kind: PieceKind,
        at: Coord,
    },
}

/// Cell state an action required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Occupied,
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Occupancy::Empty => "empty",
            Occupancy::Occupied => "occupied",
        })
    }
}

impl ActionError {
    /// Human-readable rejection reason for the `(accepted, reason)` view.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Errors building or decoding a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("compact board has {found} cells, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("unknown compact board symbol {0:?}")]
    UnknownSymbol(char),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from `GameState::apply_action`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Action(#[from] ActionError),
}
