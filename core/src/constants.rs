//! Wire-format constants shared by the varint codec and the splitter.

/// Longest legal varint: ceil(64 / 7) groups.
pub const MAX_VARINT_LEN: usize = 10;

/// High bit of every varint byte except the last.
pub const VARINT_CONTINUATION: u8 = 0x80;
/// Data bits carried by one varint byte.
pub const VARINT_PAYLOAD_MASK: u8 = 0x7F;
/// Bits of payload per varint byte.
pub const VARINT_GROUP_BITS: u32 = 7;

/// Low bits of a tag that hold the wire type.
pub const WIRE_TYPE_MASK: u64 = 0x7;
/// Width of the wire type field inside a tag.
pub const TAG_TYPE_BITS: u32 = 3;

pub const FIXED32_LEN: usize = 4;
pub const FIXED64_LEN: usize = 8;

/// Upper bound on a declared length-delimited payload (2 GiB - 1).
/// Matches the usual protobuf message size ceiling and fits `usize` on
/// every supported target.
pub const MAX_DELIMITED_LEN: u64 = i32::MAX as u64;

/// Raw wire type codes, as they appear in the low three bits of a tag.
pub mod wire_type_ids {
    pub const VARINT: u8           = 0;
    pub const FIXED64: u8          = 1;
    pub const LENGTH_DELIMITED: u8 = 2;
    pub const START_GROUP: u8      = 3; // deprecated, rejected
    pub const END_GROUP: u8        = 4; // deprecated, rejected
    pub const FIXED32: u8          = 5;
}
