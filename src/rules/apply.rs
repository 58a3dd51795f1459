//! Action validation and application.
//!
//! Every check runs before the first write, so a rejected action leaves the
//! board exactly as it was. Moves and pushes are re-derived from
//! `generate_legal_actions` rather than trusted from the caller.

use super::movegen::generate_legal_actions;
use crate::core::{Action, ActionKind, Board, Coord, Orientation, Piece, PieceKind, Side};
use crate::error::{ActionError, Occupancy};

/// What an accepted action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Moved,
    /// `grounded` is set when a river mover turned into a stone.
    Pushed { grounded: bool },
    FlippedToRiver(Orientation),
    FlippedToStone,
    Rotated(Orientation),
}

impl Applied {
    /// Short reason string for the `(accepted, reason)` view.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Applied::Moved => "moved",
            Applied::Pushed { .. } => "push applied",
            Applied::FlippedToRiver(_) => "flipped to river",
            Applied::FlippedToStone => "flipped to stone",
            Applied::Rotated(_) => "rotated",
        }
    }
}

/// Validate `action` for `side` and apply it to `board`.
///
/// On `Err` the board is untouched.
pub fn validate_and_apply(
    board: &mut Board,
    action: &Action,
    side: Side,
) -> Result<Applied, ActionError> {
    let result = match *action {
        Action::Move { from, to } => apply_move(board, from, to, side),
        Action::Push {
            from,
            to,
            pushed_to,
        } => apply_push(board, from, to, pushed_to, side),
        Action::Flip { from, orientation } => apply_flip(board, from, orientation, side),
        Action::Rotate { from } => apply_rotate(board, from, side),
    };

    match &result {
        Ok(applied) => {
            tracing::trace!(side = %side, ?action, reason = applied.reason(), "action applied");
        }
        Err(err) => {
            tracing::debug!(side = %side, ?action, error = %err, "action rejected");
        }
    }
    result
}

fn check_bounds(board: &Board, cells: &[Coord]) -> Result<(), ActionError> {
    match cells.iter().find(|&&at| !board.in_bounds(at)) {
        Some(&at) => Err(ActionError::OutOfBounds(at)),
        None => Ok(()),
    }
}

fn owned_piece(board: &Board, at: Coord, side: Side) -> Result<Piece, ActionError> {
    match board.get(at) {
        Some(&piece) if piece.owner == side => Ok(piece),
        _ => Err(ActionError::NotYourPiece { at, side }),
    }
}

fn apply_move(board: &mut Board, from: Coord, to: Coord, side: Side) -> Result<Applied, ActionError> {
    check_bounds(board, &[from, to])?;
    if board.is_opponent_score_cell(to, side) {
        return Err(ActionError::IllegalDestination { from, to });
    }
    owned_piece(board, from, side)?;
    if !board.is_empty(to) {
        return Err(ActionError::OccupancyMismatch {
            at: to,
            expected: Occupancy::Empty,
        });
    }
    if !generate_legal_actions(board, from, side).contains_move(to) {
        return Err(ActionError::IllegalDestination { from, to });
    }

    let piece = board.take(from);
    board.set(to, piece);
    Ok(Applied::Moved)
}

fn apply_push(
    board: &mut Board,
    from: Coord,
    to: Coord,
    pushed_to: Coord,
    side: Side,
) -> Result<Applied, ActionError> {
    check_bounds(board, &[from, to, pushed_to])?;

    let target = board.get(to).copied();
    if let Some(target) = target {
        if board.is_opponent_score_cell(pushed_to, target.owner) {
            return Err(ActionError::IllegalDestination {
                from: to,
                to: pushed_to,
            });
        }
    }

    let mover = owned_piece(board, from, side)?;
    let Some(target) = target else {
        return Err(ActionError::OccupancyMismatch {
            at: to,
            expected: Occupancy::Occupied,
        });
    };
    if !board.is_empty(pushed_to) {
        return Err(ActionError::OccupancyMismatch {
            at: pushed_to,
            expected: Occupancy::Empty,
        });
    }
    if mover.is_river() && target.is_river() {
        return Err(ActionError::WrongPieceKindForAction {
            action: ActionKind::Push,
            kind: mover.kind,
            at: from,
        });
    }
    if !generate_legal_actions(board, from, side).contains_push(to, pushed_to) {
        return Err(ActionError::IllegalDestination {
            from: to,
            to: pushed_to,
        });
    }

    let grounded = mover.is_river();
    let landed = if grounded {
        Piece::stone(mover.owner)
    } else {
        mover
    };

    board.take(from);
    board.place(pushed_to, target);
    board.place(to, landed);
    Ok(Applied::Pushed { grounded })
}

fn apply_flip(
    board: &mut Board,
    from: Coord,
    orientation: Option<Orientation>,
    side: Side,
) -> Result<Applied, ActionError> {
    check_bounds(board, &[from])?;
    let piece = owned_piece(board, from, side)?;

    match piece.kind {
        PieceKind::Stone => {
            let orientation = orientation.ok_or(ActionError::MissingOrientation(from))?;
            board.place(from, Piece::river(side, orientation));
            Ok(Applied::FlippedToRiver(orientation))
        }
        // A supplied orientation is ignored when grounding a river.
        PieceKind::River(_) => {
            board.place(from, Piece::stone(side));
            Ok(Applied::FlippedToStone)
        }
    }
}

fn apply_rotate(board: &mut Board, from: Coord, side: Side) -> Result<Applied, ActionError> {
    check_bounds(board, &[from])?;
    let piece = owned_piece(board, from, side)?;

    let PieceKind::River(orientation) = piece.kind else {
        return Err(ActionError::WrongPieceKindForAction {
            action: ActionKind::Rotate,
            kind: piece.kind,
            at: from,
        });
    };

    let toggled = orientation.toggled();
    if let Some(cell) = board.get_mut(from) {
        cell.kind = PieceKind::River(toggled);
    }
    Ok(Applied::Rotated(toggled))
}
