//! Python-facing wrappers.
//!
//! Thin shims: argument conversion in, exception mapping out. All wire
//! logic stays in protowire-core.

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use protowire_core::constants::MAX_VARINT_LEN;
use protowire_core::host::{self, NegativeIndex};
use protowire_core::types::{ErrorKind, WireError as CoreError};
use protowire_core::{varint, wire};

create_exception!(_protowire, WireError, PyValueError, "Malformed or out-of-range wire data.");
create_exception!(_protowire, BufferTooShort, WireError);
create_exception!(_protowire, TruncatedVarint, WireError);
create_exception!(_protowire, VarintOverflow, WireError);
create_exception!(_protowire, UnsupportedWireType, WireError);
create_exception!(_protowire, LengthOverflow, WireError);
create_exception!(_protowire, InvalidParameters, WireError);

type PyRecord<'py> = (Bound<'py, PyBytes>, Bound<'py, PyBytes>, Bound<'py, PyBytes>);

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_varint, m)?)?;
    m.add_function(wrap_pyfunction!(decode_varint, m)?)?;
    m.add_function(wrap_pyfunction!(split_buffer, m)?)?;

    m.add(host::BASE_EXCEPTION, py.get_type_bound::<WireError>())?;
    for kind in ErrorKind::ALL {
        m.add(host::exception_name(kind), exception_type(py, kind))?;
    }
    Ok(())
}

/// encode_varint(value) -> bytes
#[pyfunction]
fn encode_varint<'py>(py: Python<'py>, value: u64) -> PyResult<Bound<'py, PyBytes>> {
    let mut out = [0u8; MAX_VARINT_LEN];
    let n = varint::encode_varint(value, &mut out).map_err(to_py_err)?;
    Ok(PyBytes::new_bound(py, &out[..n]))
}

/// decode_varint(buffer, offset=0) -> (value, new_offset)
#[pyfunction]
#[pyo3(signature = (buffer, offset = 0))]
fn decode_varint(buffer: &[u8], offset: i64) -> PyResult<(u64, usize)> {
    let offset = host::checked_index(offset, "offset").map_err(negative_to_py_err)?;
    varint::decode_varint(buffer, offset).map_err(to_py_err)
}

/// split_buffer(buffer, start=0, length=None) -> [(tag, length_prefix, value), ...]
#[pyfunction]
#[pyo3(signature = (buffer, start = 0, length = None))]
fn split_buffer<'py>(
    py: Python<'py>,
    buffer: &[u8],
    start: i64,
    length: Option<i64>,
) -> PyResult<Vec<PyRecord<'py>>> {
    let start = host::checked_index(start, "start").map_err(negative_to_py_err)?;
    let length = host::checked_len(length, "length").map_err(negative_to_py_err)?;

    let records = wire::split_buffer(buffer, start, length).map_err(to_py_err)?;
    Ok(records
        .iter()
        .map(|r| {
            let (tag, prefix, value) = r.parts();
            (
                PyBytes::new_bound(py, tag),
                PyBytes::new_bound(py, prefix),
                PyBytes::new_bound(py, value),
            )
        })
        .collect())
}

fn exception_type(py: Python<'_>, kind: ErrorKind) -> Bound<'_, pyo3::types::PyType> {
    match kind {
        ErrorKind::BufferTooShort => py.get_type_bound::<BufferTooShort>(),
        ErrorKind::TruncatedVarint => py.get_type_bound::<TruncatedVarint>(),
        ErrorKind::VarintOverflow => py.get_type_bound::<VarintOverflow>(),
        ErrorKind::UnsupportedWireType => py.get_type_bound::<UnsupportedWireType>(),
        ErrorKind::LengthOverflow => py.get_type_bound::<LengthOverflow>(),
        ErrorKind::InvalidParameters => py.get_type_bound::<InvalidParameters>(),
    }
}

fn raise(kind: ErrorKind, msg: String) -> PyErr {
    match kind {
        ErrorKind::BufferTooShort => BufferTooShort::new_err(msg),
        ErrorKind::TruncatedVarint => TruncatedVarint::new_err(msg),
        ErrorKind::VarintOverflow => VarintOverflow::new_err(msg),
        ErrorKind::UnsupportedWireType => UnsupportedWireType::new_err(msg),
        ErrorKind::LengthOverflow => LengthOverflow::new_err(msg),
        ErrorKind::InvalidParameters => InvalidParameters::new_err(msg),
    }
}

fn negative_to_py_err(err: NegativeIndex) -> PyErr {
    tracing::debug!(kind = err.kind().as_str(), "rejected argument: {}", err);
    raise(err.kind(), err.to_string())
}

fn to_py_err(err: CoreError) -> PyErr {
    tracing::debug!(kind = err.kind().as_str(), "wire error: {}", err);
    raise(err.kind(), err.to_string())
}
