//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Side};

/// Parse a side name (`"circle"` / `"square"`).
pub(crate) fn parse_side(name: &str) -> PyResult<Side> {
    Side::from_name(name)
        .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("unknown side {name:?}")))
}

/// Python wrapper for Action.
///
/// Constructed from and rendered as the JSON wire form.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Parse an action from its JSON wire form.
    #[new]
    fn new(json: &str) -> PyResult<Self> {
        serde_json::from_str(json)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{e}")))
    }

    /// Action kind: `"move"`, `"push"`, `"flip"` or `"rotate"`.
    #[getter]
    fn kind(&self) -> String {
        self.0.kind().to_string()
    }

    /// The acting piece's `(x, y)`.
    #[getter]
    fn origin(&self) -> (i32, i32) {
        self.0.origin().into()
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyErr::new::<PyValueError, _>(format!("{e}")))
    }

    fn __repr__(&self) -> String {
        match serde_json::to_string(&self.0) {
            Ok(json) => format!("Action({json})"),
            Err(_) => format!("Action({:?})", self.0),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
