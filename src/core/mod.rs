//! Core engine types: sides, coordinates, pieces, the board, actions, RNG,
//! configuration and game state.
//!
//! Everything here is plain data. The rules that interpret it live in
//! `crate::rules`.

pub mod action;
pub mod board;
pub mod config;
pub mod coord;
pub mod encoding;
pub mod piece;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use board::Board;
pub use config::{
    BoardSize, ScoreColumns, ScoringTier, CIRCLE_SCORE_ROW, STALEMATE_REPEATS,
    STALEMATE_SAMPLE_INTERVAL,
};
pub use coord::{Coord, Direction};
pub use piece::{Orientation, Piece, PieceKind};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{GameState, GameStateBuilder};
