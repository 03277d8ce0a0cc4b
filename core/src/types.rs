use thiserror::Error;

/// Unified error for the varint codec and the splitter.
///
/// - Every variant is fatal to the current call; nothing is retried.
/// - Offsets are absolute positions in the caller's buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// Output buffer cannot hold the encoded varint.
    #[error("output buffer too short: have {have} bytes, need {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Input ended before the varint's terminating byte.
    #[error("truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },

    /// Varint carries more than 64 bits of data.
    #[error("varint at offset {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },

    /// Group markers (3, 4) or an unassigned code (6, 7).
    #[error("unsupported wire type {raw} at offset {offset}")]
    UnsupportedWireType { raw: u8, offset: usize },

    /// Declared or fixed length runs past the span or the size ceiling.
    #[error("length overflow at offset {offset}: need {declared} bytes, {remaining} remaining")]
    LengthOverflow { offset: usize, declared: u64, remaining: usize },

    /// `start`/`length` do not describe a range inside the buffer.
    #[error("invalid parameters: start {start}, length {length:?}, buffer length {buffer_len}")]
    InvalidParameters { start: usize, length: Option<usize>, buffer_len: usize },
}

/// Payload-free discriminant of [`WireError`], for callers that only branch
/// on the failure class (e.g. exception mapping at the FFI boundary).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BufferTooShort,
    TruncatedVarint,
    VarintOverflow,
    UnsupportedWireType,
    LengthOverflow,
    InvalidParameters,
}

impl WireError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WireError::BufferTooShort { .. } => ErrorKind::BufferTooShort,
            WireError::TruncatedVarint { .. } => ErrorKind::TruncatedVarint,
            WireError::VarintOverflow { .. } => ErrorKind::VarintOverflow,
            WireError::UnsupportedWireType { .. } => ErrorKind::UnsupportedWireType,
            WireError::LengthOverflow { .. } => ErrorKind::LengthOverflow,
            WireError::InvalidParameters { .. } => ErrorKind::InvalidParameters,
        }
    }
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::BufferTooShort,
        ErrorKind::TruncatedVarint,
        ErrorKind::VarintOverflow,
        ErrorKind::UnsupportedWireType,
        ErrorKind::LengthOverflow,
        ErrorKind::InvalidParameters,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BufferTooShort => "BufferTooShort",
            ErrorKind::TruncatedVarint => "TruncatedVarint",
            ErrorKind::VarintOverflow => "VarintOverflow",
            ErrorKind::UnsupportedWireType => "UnsupportedWireType",
            ErrorKind::LengthOverflow => "LengthOverflow",
            ErrorKind::InvalidParameters => "InvalidParameters",
        }
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
