//! Game state: the board plus everything needed to end a game.
//!
//! ## GameState
//!
//! - The board (mutated only through `apply_action`)
//! - Accepted-action history
//! - Repetition sampling for stalemate
//! - The result, once there is one
//!
//! Turn order and clocks belong to whoever drives the game. The state only
//! checks that each action is legal for the side that submits it.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::board::Board;
use super::config::BoardSize;
use super::side::{Side, SideMap};
use crate::error::GameError;
use crate::rules::{
    all_actions, check_win, compute_final_scores, validate_and_apply, Applied, FinalScores,
    GameResult, RepetitionTracker,
};

/// A game in progress or finished.
///
/// Uses `im` persistent vectors for history so snapshots clone cheaply.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    history: Vector<ActionRecord>,
    repetition: RepetitionTracker,
    result: Option<GameResult>,
}

impl GameState {
    /// Start a game from the standard position.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self::from_board(Board::starting(size))
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vector::new(),
            repetition: RepetitionTracker::new(),
            result: None,
        }
    }

    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted actions in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Every action `side` could try on the current board.
    #[must_use]
    pub fn legal_actions(&self, side: Side) -> Vec<Action> {
        all_actions(&self.board, side)
    }

    /// Validate and apply an action, then check for a win or stalemate.
    ///
    /// Returns the result if this action ended the game.
    pub fn apply_action(
        &mut self,
        side: Side,
        action: &Action,
    ) -> Result<Option<GameResult>, GameError> {
        self.apply_action_detailed(side, action)
            .map(|_| self.result)
    }

    /// Like `apply_action`, but returns what the action did.
    pub fn apply_action_detailed(
        &mut self,
        side: Side,
        action: &Action,
    ) -> Result<Applied, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let applied = validate_and_apply(&mut self.board, action, side)?;
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(side, *action, sequence));

        if let Some(winner) = check_win(&self.board) {
            tracing::info!(winner = %winner, actions = self.history.len(), "game won");
            self.result = Some(GameResult::Winner(winner));
        } else if self.repetition.record(&self.board) {
            tracing::info!(actions = self.history.len(), "stalemate by repetition");
            self.result = Some(GameResult::Draw);
        }

        Ok(applied)
    }

    /// Final scores for the current board.
    ///
    /// Uses the recorded winner; with no result yet (or a draw) the clocks
    /// may still decide a timeout win.
    #[must_use]
    pub fn final_scores(&self, remaining: Option<&SideMap<f64>>) -> FinalScores {
        let winner = self.result.and_then(|r| r.winner());
        compute_final_scores(&self.board, winner, remaining)
    }
}

/// Builder for `GameState`.
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    size: BoardSize,
    board: Option<Board>,
}

impl GameStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard size for the starting position. Ignored if `board` is set.
    #[must_use]
    pub fn size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    /// Start from this position instead of the standard one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        match self.board {
            Some(board) => GameState::from_board(board),
            None => GameState::new(self.size),
        }
    }
}
