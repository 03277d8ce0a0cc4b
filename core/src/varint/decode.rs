use crate::constants::{MAX_VARINT_LEN, VARINT_CONTINUATION, VARINT_GROUP_BITS, VARINT_PAYLOAD_MASK};
use crate::types::{Result, WireError};

/// Decode one varint starting at `offset`.
///
/// # Returns
/// - `Ok((value, new_offset))`, where `new_offset` points just past the
///   terminating byte.
/// - `Err(TruncatedVarint)` if `buf` ends before a terminating byte.
/// - `Err(VarintOverflow)` if ten groups pass without termination, or the
///   tenth group carries bits above bit 63.
/// - `Err(InvalidParameters)` if `offset > buf.len()`.
///
/// # Notes
/// - Pure; reads at most `MAX_VARINT_LEN` bytes.
/// - Bounds are those of `buf`: the splitter hands in a slice cut at the
///   span end so a varint can never read past the requested span.
#[inline]
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    let tail = buf.get(offset..).ok_or(WireError::InvalidParameters {
        start: offset,
        length: None,
        buffer_len: buf.len(),
    })?;

    let mut value = 0u64;
    for (i, &byte) in tail.iter().take(MAX_VARINT_LEN).enumerate() {
        // Tenth byte may only contribute bit 63.
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(WireError::VarintOverflow { offset });
        }
        value |= u64::from(byte & VARINT_PAYLOAD_MASK) << (VARINT_GROUP_BITS * i as u32);
        if byte & VARINT_CONTINUATION == 0 {
            return Ok((value, offset + i + 1));
        }
    }

    // Ten available bytes always resolve inside the loop.
    Err(WireError::TruncatedVarint { offset })
}
