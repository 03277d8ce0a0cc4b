use crate::constants::MAX_DELIMITED_LEN;
use crate::types::{Result, WireError};
use crate::varint::decode_varint;
use crate::wire::types::{Record, Tag, WireType};

/// Lazy, fused record iterator over `buf[start..start + length]`.
///
/// Single linear scan: one wire-type dispatch per record, no backtracking.
/// Yields `Err` at most once, then `None` forever.
#[derive(Debug, Clone)]
pub struct Splitter<'a> {
    /// Buffer cut at the span end; every read is bounded by it.
    span: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> Splitter<'a> {
    /// Validate the span and position the cursor at `start`.
    ///
    /// `length = None` means "rest of the buffer".
    pub fn new(buf: &'a [u8], start: usize, length: Option<usize>) -> Result<Self> {
        let invalid = || WireError::InvalidParameters { start, length, buffer_len: buf.len() };

        if start > buf.len() {
            return Err(invalid());
        }
        let end = match length {
            None => buf.len(),
            Some(len) => match start.checked_add(len) {
                Some(end) if end <= buf.len() => end,
                _ => return Err(invalid()),
            },
        };

        Ok(Self { span: &buf[..end], cursor: start, failed: false })
    }

    /// Bytes left before the span end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.span.len() - self.cursor
    }

    /// Absolute offset of the next record.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn next_record(&mut self) -> Result<Record<'a>> {
        let span = self.span;
        let tag_start = self.cursor;

        // Tag read failures, overlong included, surface as truncation.
        let (raw_tag, value_start) = decode_varint(span, tag_start)
            .map_err(|_| WireError::TruncatedVarint { offset: tag_start })?;
        let tag = Tag::from_raw(raw_tag, tag_start)?;

        let (prefix_end, value_end) = match tag.wire_type {
            WireType::Varint => {
                let (_, end) = decode_varint(span, value_start)?;
                (value_start, end)
            }
            WireType::Fixed64 | WireType::Fixed32 => {
                let width = tag.wire_type.fixed_width().ok_or(WireError::UnsupportedWireType {
                    raw: tag.wire_type as u8,
                    offset: tag_start,
                })?;
                (value_start, fixed_end(span, value_start, width)?)
            }
            WireType::LengthDelimited => {
                let (declared, prefix_end) = decode_varint(span, value_start)?;
                let remaining = span.len() - prefix_end;
                let len = usize::try_from(declared)
                    .ok()
                    .filter(|&len| declared <= MAX_DELIMITED_LEN && len <= remaining)
                    .ok_or(WireError::LengthOverflow { offset: prefix_end, declared, remaining })?;
                (prefix_end, prefix_end + len)
            }
            WireType::StartGroup | WireType::EndGroup => {
                return Err(WireError::UnsupportedWireType {
                    raw: tag.wire_type as u8,
                    offset: tag_start,
                });
            }
        };

        self.cursor = value_end;
        Ok(Record {
            tag,
            offset: tag_start,
            tag_bytes: &span[tag_start..value_start],
            length_prefix: &span[value_start..prefix_end],
            value: &span[prefix_end..value_end],
        })
    }
}

/// End of a fixed-width value starting at `at`, bounded by the span.
#[inline]
fn fixed_end(span: &[u8], at: usize, width: usize) -> Result<usize> {
    let remaining = span.len() - at;
    if width > remaining {
        return Err(WireError::LengthOverflow { offset: at, declared: width as u64, remaining });
    }
    Ok(at + width)
}

impl<'a> Iterator for Splitter<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining() == 0 {
            return None;
        }
        match self.next_record() {
            Ok(record) => {
                trace!(
                    "record field={} wire_type={} offset={} len={}",
                    record.tag.field_number,
                    record.tag.wire_type.as_str(),
                    record.offset,
                    record.consumed_len()
                );
                Some(Ok(record))
            }
            Err(e) => {
                debug!("split aborted at offset {}: {}", self.cursor, e);
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Splitter<'_> {}

/// Partition `buf[start..start + length]` into records, in wire order.
///
/// # Returns
/// - `Ok(records)` whose `consumed_len()` values sum to the span length.
/// - `Err(_)` on the first malformed field; no partial list is returned.
///
/// # Notes
/// - `length = None` covers the rest of the buffer from `start`.
/// - A zero-length span yields an empty list.
/// - Records borrow `buf`; nothing is copied.
pub fn split_buffer(buf: &[u8], start: usize, length: Option<usize>) -> Result<Vec<Record<'_>>> {
    Splitter::new(buf, start, length)?.collect()
}

/// `split_buffer` over the whole buffer.
#[inline]
pub fn split_all(buf: &[u8]) -> Result<Vec<Record<'_>>> {
    split_buffer(buf, 0, None)
}
