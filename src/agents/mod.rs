//! Move-selection agents.
//!
//! Agents are trait-based so drivers can plug in any strategy:
//! - `Agent`: pick an action for one side given the board and the clocks
//! - `RandomAgent`: uniform over `rules::all_actions`
//!
//! The engine never asks which agent is playing. `run_match` is a minimal
//! driver that alternates two agents on a `GameState`.

mod random;

pub use random::RandomAgent;

use crate::core::{Action, Board, GameState, Side, SideMap};
use crate::error::GameError;
use crate::rules::GameResult;

/// Remaining seconds per side.
pub type Clocks = SideMap<f64>;

/// A move-selection strategy for one side.
pub trait Agent {
    /// The side this agent plays.
    fn side(&self) -> Side;

    /// Choose an action, or `None` to pass.
    fn choose_action(&mut self, board: &Board, clocks: &Clocks) -> Option<Action>;
}

/// Alternate `circle` and `square` (Circle first) until the game ends, an
/// agent passes, or `max_actions` actions have been accepted.
///
/// Clocks are passed through to the agents untouched. An illegal action from
/// an agent ends the match with its error.
pub fn run_match(
    state: &mut GameState,
    circle: &mut dyn Agent,
    square: &mut dyn Agent,
    clocks: &Clocks,
    max_actions: usize,
) -> Result<Option<GameResult>, GameError> {
    let mut to_move = Side::Circle;

    for _ in 0..max_actions {
        let agent: &mut dyn Agent = match to_move {
            Side::Circle => &mut *circle,
            Side::Square => &mut *square,
        };

        let Some(action) = agent.choose_action(state.board(), clocks) else {
            tracing::debug!(side = %to_move, "agent passed");
            return Ok(None);
        };

        if let Some(result) = state.apply_action(to_move, &action)? {
            return Ok(Some(result));
        }
        to_move = to_move.opponent();
    }

    Ok(state.result())
}
