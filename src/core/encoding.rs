//! String encodings of a board.
//!
//! ## Compact log form
//!
//! One ASCII character per cell, row-major:
//!
//! | piece                    | circle | square |
//! |--------------------------|--------|--------|
//! | stone                    | `A`    | `a`    |
//! | river, horizontal        | `B`    | `b`    |
//! | river, vertical          | `C`    | `c`    |
//!
//! Empty cells are `.`.
//!
//! ## Canonical form
//!
//! `owner_kind_orientation` per cell (`_` when empty), cells joined with `|`
//! and rows with `||`. Two boards have the same canonical form iff their piece
//! configurations are identical.

use super::board::Board;
use super::piece::{Orientation, Piece, PieceKind};
use super::side::Side;
use crate::error::BoardError;

const EMPTY_SYMBOL: char = '.';

/// Compact symbol for an optional piece.
#[must_use]
pub fn piece_symbol(cell: Option<&Piece>) -> char {
    let Some(piece) = cell else {
        return EMPTY_SYMBOL;
    };
    let symbol = match piece.kind {
        PieceKind::Stone => 'A',
        PieceKind::River(Orientation::Horizontal) => 'B',
        PieceKind::River(Orientation::Vertical) => 'C',
    };
    match piece.owner {
        Side::Circle => symbol,
        Side::Square => symbol.to_ascii_lowercase(),
    }
}

/// Piece for a compact symbol. `Ok(None)` is an empty cell.
pub fn symbol_piece(symbol: char) -> Result<Option<Piece>, BoardError> {
    let piece = match symbol {
        EMPTY_SYMBOL => return Ok(None),
        'A' => Piece::stone(Side::Circle),
        'B' => Piece::river(Side::Circle, Orientation::Horizontal),
        'C' => Piece::river(Side::Circle, Orientation::Vertical),
        'a' => Piece::stone(Side::Square),
        'b' => Piece::river(Side::Square, Orientation::Horizontal),
        'c' => Piece::river(Side::Square, Orientation::Vertical),
        other => return Err(BoardError::UnknownSymbol(other)),
    };
    Ok(Some(piece))
}

/// Encode a board in compact log form.
#[must_use]
pub fn encode_compact(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| piece_symbol(cell.as_ref()))
        .collect()
}

/// Decode a compact log string into a `rows x cols` board.
pub fn decode_compact(encoded: &str, rows: usize, cols: usize) -> Result<Board, BoardError> {
    let expected = rows * cols;
    let found = encoded.chars().count();
    if found != expected {
        return Err(BoardError::LengthMismatch { expected, found });
    }

    let cells = encoded
        .chars()
        .map(symbol_piece)
        .collect::<Result<Vec<_>, _>>()?;

    let grid = if cols == 0 {
        Vec::new()
    } else {
        cells.chunks(cols).map(<[_]>::to_vec).collect()
    };
    Board::from_rows(grid)
}

fn canonical_cell(cell: Option<&Piece>) -> String {
    match cell {
        None => "_".to_string(),
        Some(piece) => {
            let orientation = piece.orientation().map_or("none", Orientation::name);
            format!("{}_{}_{}", piece.owner.name(), piece.kind.name(), orientation)
        }
    }
}

/// Canonical repetition key for a board.
#[must_use]
pub fn canonical_encoding(board: &Board) -> String {
    board
        .cells()
        .chunks(board.cols())
        .map(|row| {
            row.iter()
                .map(|cell| canonical_cell(cell.as_ref()))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("||")
}
