//! Python bindings for the river-stones rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import river_stones as rs
//!
//! board = rs.Board("small")
//! moves, pushes = board.legal_actions(3, 8, "circle")
//!
//! ok, reason = board.apply('{"action": "move", "from": [3, 8], "to": [2, 8]}', "circle")
//! assert ok and reason == "moved"
//!
//! winner = board.check_win()
//! scores = board.final_scores(winner)
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;

pub use py_board::*;
pub use py_core::*;

/// river_stones: authoritative rules for River and Stones.
#[pymodule]
fn river_stones(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyBoard>()?;
    Ok(())
}
