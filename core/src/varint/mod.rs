//! Varint codec.
//!
//! Responsibilities:
//! - Encode u64 values as little-endian base-128 groups
//! - Decode them back with strict truncation and overflow checks
//!
//! Non-responsibilities:
//! - ZigZag or any other signed mapping (schema layer decides)
//! - Field dispatch (see `wire`)

pub mod encode;
pub mod decode;

pub use encode::{encode_varint, encode_varint_vec, encoded_len, put_varint};
pub use decode::decode_varint;
