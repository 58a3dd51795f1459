//! Legal move and push generation for a single piece.
//!
//! Neighbors are scanned East, West, South, North. For each in-bounds
//! neighbor that is not one of the mover's opponent score cells:
//!
//! - empty: a plain move;
//! - river: every flow destination from it is a move;
//! - stone, mover is a stone: straight push one cell further;
//! - stone, mover is a river: push along the mover's flow.
//!
//! Rivers are never push targets here. Push destinations are always checked
//! against the *pushed* piece's owner, which may differ from the mover.

use rustc_hash::FxHashSet;

use super::flow::flow_destinations;
use crate::core::{Action, Board, Coord, Direction, Orientation, PieceKind, Side};

/// A push target and where the pushed piece lands.
pub type PushPair = (Coord, Coord);

/// Legal moves and pushes for one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalActions {
    /// Move destinations, deduplicated in generation order.
    pub moves: Vec<Coord>,
    /// `(target, pushed_to)` pairs in generation order.
    pub pushes: Vec<PushPair>,
}

impl LegalActions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.pushes.is_empty()
    }

    #[must_use]
    pub fn contains_move(&self, to: Coord) -> bool {
        self.moves.contains(&to)
    }

    #[must_use]
    pub fn contains_push(&self, to: Coord, pushed_to: Coord) -> bool {
        self.pushes.contains(&(to, pushed_to))
    }
}

/// Collects pairs/cells once, keeping first-seen order.
struct Ordered<T> {
    seen: FxHashSet<T>,
    items: Vec<T>,
}

impl<T: Copy + Eq + std::hash::Hash> Ordered<T> {
    fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
            items: Vec::new(),
        }
    }

    fn push(&mut self, item: T) {
        if self.seen.insert(item) {
            self.items.push(item);
        }
    }
}

/// Legal moves and pushes for the piece at `from`.
///
/// Empty when `from` is off the board, empty, or not owned by `side`.
#[must_use]
pub fn generate_legal_actions(board: &Board, from: Coord, side: Side) -> LegalActions {
    let Some(&mover) = board.get(from) else {
        return LegalActions::default();
    };
    if mover.owner != side {
        return LegalActions::default();
    }

    let mut moves = Ordered::new();
    let mut pushes = Ordered::new();

    for dir in Direction::CARDINALS {
        let next = from.step(dir);
        if !board.in_bounds(next) || board.is_opponent_score_cell(next, side) {
            continue;
        }

        let Some(&neighbor) = board.get(next) else {
            moves.push(next);
            continue;
        };

        let pushed_owner = neighbor.owner;
        match (neighbor.kind, mover.kind) {
            (PieceKind::River(_), _) => {
                for dest in flow_destinations(board, next, from, side, false) {
                    moves.push(dest);
                }
            }
            (PieceKind::Stone, PieceKind::Stone) => {
                let beyond = next.step(dir);
                if board.is_empty(beyond) && !board.is_opponent_score_cell(beyond, pushed_owner) {
                    pushes.push((next, beyond));
                }
            }
            (PieceKind::Stone, PieceKind::River(_)) => {
                for dest in flow_destinations(board, next, from, pushed_owner, true) {
                    if !board.is_opponent_score_cell(dest, pushed_owner) {
                        pushes.push((next, dest));
                    }
                }
            }
        }
    }

    LegalActions {
        moves: moves.items,
        pushes: pushes.items,
    }
}

/// Every action `side` could take, piece by piece in row-major order.
///
/// Per piece: moves, then pushes, then flips (both orientations for a stone,
/// back to stone for a river), then a rotate for rivers.
#[must_use]
pub fn all_actions(board: &Board, side: Side) -> Vec<Action> {
    let mut actions = Vec::new();

    for (from, piece) in board.pieces_of(side) {
        let legal = generate_legal_actions(board, from, side);

        actions.extend(legal.moves.iter().map(|&to| Action::Move { from, to }));
        actions.extend(legal.pushes.iter().map(|&(to, pushed_to)| Action::Push {
            from,
            to,
            pushed_to,
        }));

        match piece.kind {
            PieceKind::Stone => {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    actions.push(Action::Flip {
                        from,
                        orientation: Some(orientation),
                    });
                }
            }
            PieceKind::River(_) => {
                actions.push(Action::Flip {
                    from,
                    orientation: None,
                });
                actions.push(Action::Rotate { from });
            }
        }
    }

    tracing::trace!(side = %side, count = actions.len(), "enumerated actions");
    actions
}
