use bytes::BufMut;

use crate::constants::{VARINT_CONTINUATION, VARINT_GROUP_BITS, VARINT_PAYLOAD_MASK};
use crate::types::{Result, WireError};

/// Number of bytes `encode_varint` writes for `value` (1..=10).
#[inline]
pub const fn encoded_len(value: u64) -> usize {
    // `| 1` keeps zero at one significant bit.
    let bits = 64 - (value | 1).leading_zeros();
    ((bits + VARINT_GROUP_BITS - 1) / VARINT_GROUP_BITS) as usize
}

/// Encode `value` into the front of `out`, least-significant group first.
///
/// # Returns
/// - `Ok(n)` with the number of bytes written.
/// - `Err(WireError::BufferTooShort)` if `out` is smaller than `encoded_len(value)`;
///   `out` is left untouched in that case.
#[inline]
pub fn encode_varint(value: u64, out: &mut [u8]) -> Result<usize> {
    let need = encoded_len(value);
    if out.len() < need {
        return Err(WireError::BufferTooShort { have: out.len(), need });
    }

    let mut v = value;
    let mut i = 0usize;
    while v >= u64::from(VARINT_CONTINUATION) {
        out[i] = (v as u8 & VARINT_PAYLOAD_MASK) | VARINT_CONTINUATION;
        v >>= VARINT_GROUP_BITS;
        i += 1;
    }
    out[i] = v as u8;

    debug_assert_eq!(i + 1, need, "varint length disagrees with encoded_len");
    Ok(need)
}

/// Owned form: encode `value` into a fresh `Vec`.
pub fn encode_varint_vec(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    put_varint(&mut out, value);
    out
}

/// Append `value` to a growable buffer. Returns the bytes written.
pub fn put_varint<B: BufMut>(buf: &mut B, value: u64) -> usize {
    let mut v = value;
    let mut n = 1usize;
    while v >= u64::from(VARINT_CONTINUATION) {
        buf.put_u8((v as u8 & VARINT_PAYLOAD_MASK) | VARINT_CONTINUATION);
        v >>= VARINT_GROUP_BITS;
        n += 1;
    }
    buf.put_u8(v as u8);
    n
}
