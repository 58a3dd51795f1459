use super::{Agent, Clocks};
use crate::core::{Action, Board, GameRng, Side};
use crate::rules::all_actions;

/// Picks uniformly among every action the side could take.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    side: Side,
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(side: Side, seed: u64) -> Self {
        Self::with_rng(side, GameRng::new(seed))
    }

    #[must_use]
    pub fn with_rng(side: Side, rng: GameRng) -> Self {
        Self { side, rng }
    }

    /// One agent per side, each on its own fork of `seed`.
    #[must_use]
    pub fn pair(seed: u64) -> (Self, Self) {
        let mut root = GameRng::new(seed);
        (
            Self::with_rng(Side::Circle, root.fork()),
            Self::with_rng(Side::Square, root.fork()),
        )
    }
}

impl Agent for RandomAgent {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_action(&mut self, board: &Board, _clocks: &Clocks) -> Option<Action> {
        let actions = all_actions(board, self.side);
        self.rng.choose(&actions).copied()
    }
}
