//! protowire-python
//!
//! Python bindings for protowire-core (PyO3).

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn _protowire(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(py, m)?;
    Ok(())
}
