//! Board bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Board, BoardSize, Coord, Side, SideMap};
use crate::rules::{
    all_actions, check_win, compute_final_scores, generate_legal_actions, validate_and_apply,
};

use super::py_core::{parse_side, PyAction};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Python wrapper for Board.
///
/// The authoritative rules for bots and game servers written in Python.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard {
    board: Board,
}

#[pymethods]
impl PyBoard {
    /// Create a starting board.
    ///
    /// # Arguments
    /// - size: `"small"` (13x12), `"medium"` (15x14) or `"large"` (17x16)
    /// - empty: leave the board without pieces
    #[new]
    #[pyo3(signature = (size = "small", empty = false))]
    fn new(size: &str, empty: bool) -> PyResult<Self> {
        let size: BoardSize =
            serde_json::from_value(serde_json::Value::String(size.to_string())).map_err(value_error)?;
        let board = if empty {
            Board::empty(size)
        } else {
            Board::starting(size)
        };
        Ok(Self { board })
    }

    /// Load a board file (`{"board": [[...]]}`).
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Board::from_json(json)
            .map(|board| Self { board })
            .map_err(value_error)
    }

    fn to_json(&self) -> PyResult<String> {
        self.board.to_json().map_err(value_error)
    }

    /// One character per cell, row-major.
    fn compact(&self) -> String {
        self.board.to_compact()
    }

    /// Repetition key: identical iff the piece configuration is identical.
    fn canonical(&self) -> String {
        self.board.canonical_encoding()
    }

    #[getter]
    fn rows(&self) -> usize {
        self.board.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.board.cols()
    }

    #[getter]
    fn score_cols(&self) -> Vec<i32> {
        self.board.score_columns().to_vec()
    }

    /// Legal moves and pushes for the piece at `(x, y)`.
    ///
    /// Returns `(moves, pushes)` where `moves` is a list of `(x, y)` and
    /// `pushes` a list of `((tx, ty), (px, py))`.
    #[allow(clippy::type_complexity)]
    fn legal_actions(
        &self,
        x: i32,
        y: i32,
        side: &str,
    ) -> PyResult<(Vec<(i32, i32)>, Vec<((i32, i32), (i32, i32))>)> {
        let side = parse_side(side)?;
        let legal = generate_legal_actions(&self.board, Coord::new(x, y), side);
        let moves = legal.moves.into_iter().map(Into::into).collect();
        let pushes = legal
            .pushes
            .into_iter()
            .map(|(to, pushed_to)| (to.into(), pushed_to.into()))
            .collect();
        Ok((moves, pushes))
    }

    /// Every action `side` could take.
    fn all_actions(&self, side: &str) -> PyResult<Vec<PyAction>> {
        let side = parse_side(side)?;
        Ok(all_actions(&self.board, side).into_iter().map(PyAction).collect())
    }

    /// Validate and apply a JSON action for `side`.
    ///
    /// Returns `(accepted, reason)`. A rejected action leaves the board unchanged.
    fn apply(&mut self, move_json: &str, side: &str) -> PyResult<(bool, String)> {
        let side = parse_side(side)?;
        let action: Action = match serde_json::from_str(move_json) {
            Ok(action) => action,
            Err(e) => return Ok((false, format!("malformed action: {e}"))),
        };
        Ok(match validate_and_apply(&mut self.board, &action, side) {
            Ok(applied) => (true, applied.reason().to_string()),
            Err(err) => (false, err.reason()),
        })
    }

    /// The side that has won, if any.
    fn check_win(&self) -> Option<String> {
        check_win(&self.board).map(|side| side.name().to_string())
    }

    /// Final scores as `{"circle": .., "square": ..}`.
    ///
    /// With no `winner`, a clock at or below zero on exactly one side hands
    /// the win to the other.
    #[pyo3(signature = (winner = None, circle_time = None, square_time = None))]
    fn final_scores(
        &self,
        winner: Option<&str>,
        circle_time: Option<f64>,
        square_time: Option<f64>,
    ) -> PyResult<std::collections::HashMap<String, f64>> {
        let winner: Option<Side> = winner.map(parse_side).transpose()?;
        let remaining = match (circle_time, square_time) {
            (Some(circle), Some(square)) => Some(SideMap::new(circle, square)),
            _ => None,
        };
        let scores = compute_final_scores(&self.board, winner, remaining.as_ref());
        Ok(scores
            .iter()
            .map(|(side, score)| (side.name().to_string(), *score))
            .collect())
    }

    fn __str__(&self) -> String {
        self.board.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Board({}x{})", self.board.rows(), self.board.cols())
    }
}
