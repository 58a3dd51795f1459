//! Terminal conditions: score-row wins and position-repetition stalemate.

use im::Vector;

use crate::core::{Board, PieceKind, Side, STALEMATE_REPEATS, STALEMATE_SAMPLE_INTERVAL};

/// Stones `side` has resting in its own score cells.
#[must_use]
pub fn count_scoring_stones(board: &Board, side: Side) -> usize {
    board
        .pieces_of(side)
        .filter(|(at, piece)| piece.kind == PieceKind::Stone && board.is_own_score_cell(*at, side))
        .count()
}

/// The side that has reached the win count, if any. Circle is checked first.
#[must_use]
pub fn check_win(board: &Board) -> Option<Side> {
    let win_count = board.tier().win_count;
    Side::ALL
        .into_iter()
        .find(|&side| count_scoring_stones(board, side) >= win_count)
}

/// Samples the board every few accepted actions and flags three identical
/// samples in a row.
///
/// Sampling once per round (both sides twice) ignores positions that repeat
/// within a round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepetitionTracker {
    since_sample: u32,
    samples: Vector<String>,
}

impl RepetitionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one accepted action. Returns `true` when this action completes
    /// a stalemate.
    pub fn record(&mut self, board: &Board) -> bool {
        self.since_sample += 1;
        if self.since_sample < STALEMATE_SAMPLE_INTERVAL {
            return false;
        }

        self.since_sample = 0;
        self.samples.push_back(board.canonical_encoding());
        tracing::trace!(samples = self.samples.len(), "sampled board for repetition");
        self.is_stalemate()
    }

    /// Whether the most recent samples are all identical.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        let len = self.samples.len();
        if len < STALEMATE_REPEATS {
            return false;
        }
        let last = &self.samples[len - 1];
        self.samples
            .iter()
            .skip(len - STALEMATE_REPEATS)
            .all(|s| s == last)
    }

    /// Number of samples taken so far.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
