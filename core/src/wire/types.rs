use byteorder::{ByteOrder, LittleEndian};
use num_enum::TryFromPrimitive;

use crate::constants::{wire_type_ids, FIXED32_LEN, FIXED64_LEN, TAG_TYPE_BITS, WIRE_TYPE_MASK};
use crate::types::{Result, WireError};
use crate::varint::{decode_varint, encode_varint_vec};

/// Wire type carried in the low three bits of every tag.
///
/// Group markers are listed so the splitter can reject them by name;
/// codes 6 and 7 never convert.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum WireType {
    Varint          = wire_type_ids::VARINT,
    Fixed64         = wire_type_ids::FIXED64,
    LengthDelimited = wire_type_ids::LENGTH_DELIMITED,
    StartGroup      = wire_type_ids::START_GROUP,
    EndGroup        = wire_type_ids::END_GROUP,
    Fixed32         = wire_type_ids::FIXED32,
}

impl WireType {
    /// Map a raw 3-bit code. `offset` locates the tag for error reporting.
    #[inline]
    pub fn from_code(raw: u8, offset: usize) -> Result<Self> {
        WireType::try_from_primitive(raw).map_err(|_| WireError::UnsupportedWireType { raw, offset })
    }

    /// Value width for the fixed-size types.
    #[inline]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            WireType::Fixed32 => Some(FIXED32_LEN),
            WireType::Fixed64 => Some(FIXED64_LEN),
            _ => None,
        }
    }

    /// False for the deprecated group markers.
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, WireType::StartGroup | WireType::EndGroup)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "start-group",
            WireType::EndGroup => "end-group",
            WireType::Fixed32 => "fixed32",
        }
    }
}

/// Decoded tag: field number plus wire type.
///
/// The field number is surfaced for callers but never interpreted here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    pub field_number: u64,
    pub wire_type: WireType,
}

impl Tag {
    pub const fn new(field_number: u64, wire_type: WireType) -> Self {
        Self { field_number, wire_type }
    }

    /// Split a raw tag value. Fails on wire codes 6 and 7.
    #[inline]
    pub fn from_raw(raw: u64, offset: usize) -> Result<Self> {
        let wire_type = WireType::from_code((raw & WIRE_TYPE_MASK) as u8, offset)?;
        Ok(Self { field_number: raw >> TAG_TYPE_BITS, wire_type })
    }

    /// Raw tag value. Field numbers above 2^61 - 1 lose their top bits.
    #[inline]
    pub const fn to_raw(self) -> u64 {
        (self.field_number << TAG_TYPE_BITS) | self.wire_type as u64
    }

    /// Varint bytes of the raw tag.
    pub fn encode(self) -> Vec<u8> {
        encode_varint_vec(self.to_raw())
    }
}

/// One field as it sits on the wire.
///
/// All slices borrow the caller's buffer:
/// `tag_bytes ++ length_prefix ++ value` is exactly the byte range
/// `offset..offset + consumed_len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub tag: Tag,
    /// Absolute position of the first tag byte.
    pub offset: usize,
    pub tag_bytes: &'a [u8],
    /// Empty unless `tag.wire_type == LengthDelimited`.
    pub length_prefix: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Record<'a> {
    #[inline]
    pub fn wire_type(&self) -> WireType {
        self.tag.wire_type
    }

    #[inline]
    pub fn field_number(&self) -> u64 {
        self.tag.field_number
    }

    /// Bytes this record occupies on the wire.
    #[inline]
    pub fn consumed_len(&self) -> usize {
        self.tag_bytes.len() + self.length_prefix.len() + self.value.len()
    }

    /// The plain (tag, length-prefix, value) triple.
    #[inline]
    pub fn parts(&self) -> (&'a [u8], &'a [u8], &'a [u8]) {
        (self.tag_bytes, self.length_prefix, self.value)
    }

    /// Decoded value of a VARINT record.
    pub fn varint_value(&self) -> Option<u64> {
        match self.tag.wire_type {
            WireType::Varint => decode_varint(self.value, 0).ok().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Little-endian value of a FIXED32 record.
    pub fn fixed32_le(&self) -> Option<u32> {
        match self.tag.wire_type {
            WireType::Fixed32 if self.value.len() == FIXED32_LEN => Some(LittleEndian::read_u32(self.value)),
            _ => None,
        }
    }

    /// Little-endian value of a FIXED64 record.
    pub fn fixed64_le(&self) -> Option<u64> {
        match self.tag.wire_type {
            WireType::Fixed64 if self.value.len() == FIXED64_LEN => Some(LittleEndian::read_u64(self.value)),
            _ => None,
        }
    }

    /// Length declared by the prefix of a LENGTH_DELIMITED record.
    pub fn declared_len(&self) -> Option<u64> {
        match self.tag.wire_type {
            WireType::LengthDelimited => decode_varint(self.length_prefix, 0).ok().map(|(v, _)| v),
            _ => None,
        }
    }
}
