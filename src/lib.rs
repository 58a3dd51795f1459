//! # river-stones
//!
//! The authoritative rules engine for River and Stones, a two-player
//! abstract strategy game on a rectangular grid.
//!
//! Pieces are either stones, which step and push, or rivers, which carry
//! pieces along their axis and chain into other rivers. Each side tries to
//! rest enough stones in its own score cells.
//!
//! ## Design Principles
//!
//! 1. **Re-derive, never trust**: moves and pushes are checked against the
//!    generated legal set, not against what the caller claims.
//!
//! 2. **All-or-nothing**: every check runs before any write, so a rejected
//!    action leaves the board byte-for-byte unchanged.
//!
//! 3. **Plain values**: pieces are `Copy` records in an owned grid. Moving or
//!    pushing is a copy plus a clear.
//!
//! ## Modules
//!
//! - `core`: Sides, coordinates, pieces, board, actions, RNG, configuration, game state
//! - `rules`: Flow resolution, move generation, validation, win/stalemate, scoring
//! - `agents`: Move-selection trait and a random agent
//! - `error`: Rejection taxonomy and board/game errors
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use river_stones::{Action, Coord, GameState, Side, BoardSize};
//!
//! let mut game = GameState::new(BoardSize::Small);
//! let step = Action::Move { from: Coord::new(3, 8), to: Coord::new(2, 8) };
//!
//! assert_eq!(game.apply_action(Side::Circle, &step), Ok(None));
//! assert_eq!(game.history().len(), 1);
//! ```

pub mod agents;
pub mod core;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, Board, BoardSize, Coord, Direction, GameRng, GameState,
    GameStateBuilder, Orientation, Piece, PieceKind, ScoringTier, Side, SideMap,
};

pub use crate::error::{ActionError, BoardError, GameError, Occupancy};

pub use crate::rules::{
    all_actions, check_win, compute_final_scores, count_reachable_in_one, count_scoring_stones,
    flow_destinations, generate_legal_actions, validate_and_apply, Applied, FinalScores,
    GameResult, LegalActions, RepetitionTracker,
};

pub use crate::agents::{run_match, Agent, Clocks, RandomAgent};
