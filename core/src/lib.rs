//! protowire-core
//!
//! Schema-less protobuf wire codec.
//! Varint encode/decode plus a splitter that cuts a serialized message into
//! raw (tag, length-prefix, value) spans. No schemas, no Python, no FFI.

#![forbid(unsafe_code)]

// Logging hooks. Compiled out unless the `trace` feature is on.
#[cfg(feature = "trace")]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}
#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}
#[cfg(not(feature = "trace"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

// Shared and top level
pub mod constants;
pub mod types;

// Codec layers
pub mod varint;
pub mod wire;

pub mod telemetry;

// Binding support
pub mod host;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::types::{ErrorKind, Result, WireError};
    pub use crate::varint::{decode_varint, encode_varint, encode_varint_vec, encoded_len, put_varint};
    pub use crate::wire::{split_all, split_buffer, Record, Splitter, Tag, WireType};
    pub use crate::telemetry::SplitStats;
}
