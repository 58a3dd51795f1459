//! Final scores from a terminal board.
//!
//! For a side S on a board of tier (W, total):
//!
//! - `n(S)`: S's stones resting in S's own score cells;
//! - `m(S)`: S's non-scoring stones that could reach an own score cell in one
//!   action, plus S's rivers already sitting in an own score cell.
//!
//! A win gives the loser `W * (n + m / total)` and the winner the rest of 100.
//! A draw gives each side `30 + (39 + standing(S) - standing(opponent)) / 4`
//! where `standing = n + m / total`.

use super::movegen::generate_legal_actions;
use super::terminal::count_scoring_stones;
use crate::core::{Board, PieceKind, Side, SideMap};

/// Points each side gets from a finished game.
pub type FinalScores = SideMap<f64>;

const DRAW_BASE: f64 = 30.0;
const MARGIN_BASE: f64 = 39.0;
const WIN_TOTAL: f64 = 100.0;

/// Pieces of `side` one action away from scoring.
#[must_use]
pub fn count_reachable_in_one(board: &Board, side: Side) -> usize {
    board
        .pieces_of(side)
        .filter(|&(at, piece)| {
            let on_score_cell = board.is_own_score_cell(at, side);
            match piece.kind {
                PieceKind::River(_) => on_score_cell,
                PieceKind::Stone if on_score_cell => false,
                PieceKind::Stone => {
                    let legal = generate_legal_actions(board, at, side);
                    legal
                        .moves
                        .iter()
                        .any(|&to| board.is_own_score_cell(to, side))
                        || legal
                            .pushes
                            .iter()
                            .any(|&(_, pushed_to)| board.is_own_score_cell(pushed_to, side))
                }
            }
        })
        .count()
}

/// Winner implied by the clocks when none was declared.
///
/// Exactly one side out of time hands the game to the other. Both or neither
/// out of time leaves `winner` as given.
#[must_use]
pub fn resolve_winner(winner: Option<Side>, remaining: Option<&SideMap<f64>>) -> Option<Side> {
    if winner.is_some() {
        return winner;
    }
    let remaining = remaining?;
    match (remaining.circle <= 0.0, remaining.square <= 0.0) {
        (true, false) => Some(Side::Square),
        (false, true) => Some(Side::Circle),
        _ => None,
    }
}

fn standing(board: &Board, side: Side) -> f64 {
    let total = board.tier().total_pieces as f64;
    let n = count_scoring_stones(board, side) as f64;
    let m = count_reachable_in_one(board, side) as f64;
    n + m / total
}

/// Score both sides of a finished game.
///
/// `winner` is `None` for a draw. `remaining` clock times, when given, can
/// turn a draw into a timeout win.
#[must_use]
pub fn compute_final_scores(
    board: &Board,
    winner: Option<Side>,
    remaining: Option<&SideMap<f64>>,
) -> FinalScores {
    let scores = match resolve_winner(winner, remaining) {
        Some(winner) => {
            let loser = winner.opponent();
            let loser_score = board.tier().weight * standing(board, loser);
            let mut scores = SideMap::with_value(0.0);
            scores[loser] = loser_score;
            scores[winner] = WIN_TOTAL - loser_score;
            scores
        }
        None => {
            let standings = SideMap::from_fn(|side| standing(board, side));
            SideMap::from_fn(|side| {
                let margin = MARGIN_BASE + standings[side] - standings[side.opponent()];
                DRAW_BASE + margin / 4.0
            })
        }
    };

    tracing::info!(
        circle = scores.circle,
        square = scores.square,
        "computed final scores"
    );
    scores
}
