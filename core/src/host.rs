//! Argument checks for host-language bindings.
//!
//! Hosts such as Python hand over signed integers; the codec works in
//! `usize`. Conversion and the naming of host-side error classes live here
//! so every binding reports failures the same way.

use thiserror::Error;

use crate::types::ErrorKind;

/// A host passed a negative index or length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} must be a non-negative offset, got {value}")]
pub struct NegativeIndex {
    pub name: &'static str,
    pub value: i64,
}

impl NegativeIndex {
    /// Always reported as `InvalidParameters`.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidParameters
    }
}

/// Convert a signed host index into a buffer position.
#[inline]
pub fn checked_index(value: i64, name: &'static str) -> Result<usize, NegativeIndex> {
    usize::try_from(value).map_err(|_| NegativeIndex { name, value })
}

/// Convert an optional signed host length.
#[inline]
pub fn checked_len(value: Option<i64>, name: &'static str) -> Result<Option<usize>, NegativeIndex> {
    value.map(|v| checked_index(v, name)).transpose()
}

/// Name of the host exception class raised for `kind`.
///
/// One class per kind, all deriving from `BASE_EXCEPTION`.
pub fn exception_name(kind: ErrorKind) -> &'static str {
    kind.as_str()
}

pub const BASE_EXCEPTION: &str = "WireError";
