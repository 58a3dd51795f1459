//! The board: a fixed `rows x cols` grid of optional pieces.
//!
//! Cells are stored row-major in a flat `Vec<Option<Piece>>`. Pieces are
//! plain `Copy` values, so moving or pushing is a copy followed by a clear and
//! no cell ever aliases another.
//!
//! ## Geometry
//!
//! - Circle's own score cells: row 2, score columns.
//! - Square's own score cells: row `rows - 3`, score columns.
//! - A side's *opponent* score cells are the other side's own score cells.
//!   No piece may come to rest on its owner's opponent score cells.
//!
//! ## Serialization
//!
//! Boards serialize as `{"board": [[piece|null, ...], ...]}`, the board-file
//! format bots and the game server exchange.

use serde::{Deserialize, Serialize};

use super::config::{BoardSize, ScoreColumns, ScoringTier, CIRCLE_SCORE_ROW};
use super::coord::Coord;
use super::encoding;
use super::piece::Piece;
use super::side::Side;
use crate::error::BoardError;

/// A game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Create an empty board of a standard size.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            rows: size.rows(),
            cols: size.cols(),
            cells: vec![None; size.rows() * size.cols()],
        }
    }

    /// Create the symmetric starting position for a standard size.
    #[must_use]
    pub fn starting(size: BoardSize) -> Self {
        let mut board = Self::empty(size);
        board.place_starting_pieces();
        board
    }

    /// Create the starting position for arbitrary dimensions.
    ///
    /// Each side gets `cols` stones in two centered rows of `cols / 2`.
    /// Square occupies rows 3 and 4, Circle rows `rows - 5` and `rows - 4`.
    pub fn starting_with_dims(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let mut board = Self::new(rows, cols)?;
        board.place_starting_pieces();
        Ok(board)
    }

    fn place_starting_pieces(&mut self) {
        let per_row = self.cols / 2;
        let start_col = (self.cols - per_row) / 2;
        let rows = self.rows as i32;

        for (side, lines) in [(Side::Square, [3, 4]), (Side::Circle, [rows - 5, rows - 4])] {
            for y in lines {
                for x in start_col..start_col + per_row {
                    let at = Coord::new(x as i32, y);
                    if self.in_bounds(at) {
                        self.set(at, Some(Piece::stone(side)));
                    }
                }
            }
        }
    }

    /// Build a board from rows of cells.
    pub fn from_rows(rows: Vec<Vec<Option<Piece>>>) -> Result<Self, BoardError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut board = Self::new(row_count, cols)?;

        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(BoardError::RaggedRow {
                    row: y,
                    expected: cols,
                    found: row.len(),
                });
            }
            let start = y * cols;
            board.cells[start..start + cols].copy_from_slice(&row);
        }

        Ok(board)
    }

    /// Cells as rows, the inverse of `from_rows`.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<Piece>>> {
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Parse a board file (`{"board": [[...]]}`).
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let record: BoardRecord = serde_json::from_str(json)?;
        Self::from_rows(record.board)
    }

    /// Serialize as a board file.
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode the one-character-per-cell log form.
    pub fn from_compact(encoded: &str, rows: usize, cols: usize) -> Result<Self, BoardError> {
        encoding::decode_compact(encoded, rows, cols)
    }

    /// One-character-per-cell log form.
    #[must_use]
    pub fn to_compact(&self) -> String {
        encoding::encode_compact(self)
    }

    /// Canonical string used for repetition detection.
    #[must_use]
    pub fn canonical_encoding(&self) -> String {
        encoding::canonical_encoding(self)
    }

    // === Dimensions & geometry ===

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Standard preset matching these dimensions, if any.
    #[must_use]
    pub fn size(&self) -> Option<BoardSize> {
        BoardSize::from_dims(self.rows, self.cols)
    }

    /// Width-dependent constants for this board.
    #[must_use]
    pub fn tier(&self) -> ScoringTier {
        ScoringTier::for_cols(self.cols)
    }

    /// Score column indices for this board.
    #[must_use]
    pub fn score_columns(&self) -> ScoreColumns {
        self.tier().score_columns(self.cols)
    }

    #[must_use]
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.x >= 0 && at.y >= 0 && (at.x as usize) < self.cols && (at.y as usize) < self.rows
    }

    /// Row holding `side`'s own score cells.
    #[must_use]
    pub fn score_row(&self, side: Side) -> i32 {
        match side {
            Side::Circle => CIRCLE_SCORE_ROW,
            Side::Square => self.rows as i32 - 3,
        }
    }

    fn is_score_column(&self, x: i32) -> bool {
        let tier = self.tier();
        let start = (self.cols.saturating_sub(tier.score_width) / 2) as i32;
        x >= start && x < start + tier.score_width as i32
    }

    /// Whether `at` is one of `side`'s own score cells.
    #[must_use]
    pub fn is_own_score_cell(&self, at: Coord, side: Side) -> bool {
        at.y == self.score_row(side) && self.is_score_column(at.x)
    }

    /// Whether `at` is one of the score cells `side` may never rest on.
    #[must_use]
    pub fn is_opponent_score_cell(&self, at: Coord, side: Side) -> bool {
        self.is_own_score_cell(at, side.opponent())
    }

    // === Cells ===

    fn index(&self, at: Coord) -> Option<usize> {
        self.in_bounds(at)
            .then(|| at.y as usize * self.cols + at.x as usize)
    }

    /// The piece at `at`, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&Piece> {
        self.index(at).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether `at` is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.index(at).is_some_and(|i| self.cells[i].is_none())
    }

    /// Overwrite a cell. Off-board coordinates are ignored.
    ///
    /// Intended for setting up positions. Game moves go through
    /// `rules::validate_and_apply`.
    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        if let Some(i) = self.index(at) {
            self.cells[i] = piece;
        }
    }

    /// Place a piece on a cell.
    pub fn place(&mut self, at: Coord, piece: Piece) {
        self.set(at, Some(piece));
    }

    /// Remove and return the piece at `at`.
    pub fn take(&mut self, at: Coord) -> Option<Piece> {
        self.index(at).and_then(|i| self.cells[i].take())
    }

    /// Mutable access to the piece at `at`.
    pub(crate) fn get_mut(&mut self, at: Coord) -> Option<&mut Piece> {
        self.index(at).and_then(move |i| self.cells[i].as_mut())
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Option<Piece>] {
        &self.cells
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|p| (Coord::new((i % cols) as i32, (i / cols) as i32), p))
        })
    }

    /// Iterate over `side`'s pieces in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.owner == side)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let compact = self.to_compact();
        for (i, row) in compact.as_bytes().chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            // Compact symbols are ASCII.
            f.write_str(std::str::from_utf8(row).map_err(|_| std::fmt::Error)?)?;
        }
        Ok(())
    }
}

/// Board-file shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct BoardRecord {
    board: Vec<Vec<Option<Piece>>>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        Board::from_rows(record.board)
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        BoardRecord {
            board: board.to_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;

    #[test]
    fn test_new_rejects_zero_dims() {
        assert!(matches!(
            Board::new(0, 12),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 12 })
        ));
    }

    #[test]
    fn test_in_bounds() {
        let board = Board::empty(BoardSize::Small);
        assert!(board.in_bounds(Coord::new(0, 0)));
        assert!(board.in_bounds(Coord::new(11, 12)));
        assert!(!board.in_bounds(Coord::new(12, 0)));
        assert!(!board.in_bounds(Coord::new(0, 13)));
        assert!(!board.in_bounds(Coord::new(-1, 3)));
    }

    #[test]
    fn test_score_cells_small() {
        let board = Board::empty(BoardSize::Small);
        assert_eq!(board.score_row(Side::Circle), 2);
        assert_eq!(board.score_row(Side::Square), 10);

        assert!(board.is_own_score_cell(Coord::new(4, 2), Side::Circle));
        assert!(board.is_own_score_cell(Coord::new(7, 2), Side::Circle));
        assert!(!board.is_own_score_cell(Coord::new(8, 2), Side::Circle));
        assert!(!board.is_own_score_cell(Coord::new(4, 2), Side::Square));

        assert!(board.is_opponent_score_cell(Coord::new(5, 10), Side::Circle));
        assert!(board.is_opponent_score_cell(Coord::new(5, 2), Side::Square));
        assert!(!board.is_opponent_score_cell(Coord::new(5, 2), Side::Circle));
    }

    #[test]
    fn test_starting_layout_small() {
        let board = Board::starting(BoardSize::Small);

        assert_eq!(board.pieces_of(Side::Circle).count(), 12);
        assert_eq!(board.pieces_of(Side::Square).count(), 12);

        // Six per row starting at column 3.
        assert_eq!(board.get(Coord::new(3, 3)), Some(&Piece::stone(Side::Square)));
        assert_eq!(board.get(Coord::new(8, 4)), Some(&Piece::stone(Side::Square)));
        assert_eq!(board.get(Coord::new(2, 3)), None);
        assert_eq!(board.get(Coord::new(9, 4)), None);
        assert_eq!(board.get(Coord::new(3, 8)), Some(&Piece::stone(Side::Circle)));
        assert_eq!(board.get(Coord::new(8, 9)), Some(&Piece::stone(Side::Circle)));
    }

    #[test]
    fn test_starting_layout_large() {
        let board = Board::starting(BoardSize::Large);
        assert_eq!(board.pieces_of(Side::Circle).count(), 16);
        assert_eq!(board.get(Coord::new(4, 12)), Some(&Piece::stone(Side::Circle)));
        assert_eq!(board.get(Coord::new(11, 13)), Some(&Piece::stone(Side::Circle)));
    }

    #[test]
    fn test_set_take_and_pieces() {
        let mut board = Board::empty(BoardSize::Small);
        let river = Piece::river(Side::Circle, Orientation::Vertical);
        board.place(Coord::new(1, 1), river);
        board.place(Coord::new(0, 5), Piece::stone(Side::Square));

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (Coord::new(1, 1), river),
                (Coord::new(0, 5), Piece::stone(Side::Square))
            ]
        );

        assert_eq!(board.take(Coord::new(1, 1)), Some(river));
        assert!(board.is_empty(Coord::new(1, 1)));
        assert!(!board.is_empty(Coord::new(-1, 1)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut board = Board::starting(BoardSize::Small);
        board.place(Coord::new(0, 0), Piece::river(Side::Square, Orientation::Horizontal));

        let json = board.to_json().unwrap();
        let back = Board::from_json(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_json_rejects_ragged_rows() {
        let json = r#"{"board": [[null, null], [null]]}"#;
        assert!(matches!(
            Board::from_json(json),
            Err(BoardError::RaggedRow { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_display_rows() {
        let mut board = Board::new(2, 3).unwrap();
        board.place(Coord::new(2, 1), Piece::stone(Side::Circle));
        assert_eq!(board.to_string(), "...\n..A");
    }
}
