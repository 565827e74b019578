//! GPMF value type, the first byte of the KLV descriptor.

use std::fmt::Display;

/// Element encoding of a KLV entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `b` 8-bit signed integer
    SInt8,
    /// `B` 8-bit unsigned integer
    UInt8,
    /// `c` 8-bit 'c' style ASCII character string
    Ascii,
    /// `s` 16-bit signed integer
    SInt16,
    /// `S` 16-bit unsigned integer
    UInt16,
    /// `l` 32-bit signed integer
    SInt32,
    /// `L` 32-bit unsigned integer
    UInt32,
    /// `f` 32-bit float (IEEE 754)
    Float32,
    /// `d` 64-bit double precision (IEEE 754)
    Float64,
    /// `F` 32-bit four character key
    FourCC,
    /// `G` 128-bit ID (like UUID)
    Guid,
    /// `j` 64-bit signed integer
    SInt64,
    /// `J` 64-bit unsigned integer
    UInt64,
    /// `q` 32-bit Q Number Q15.16
    Qf32,
    /// `Q` 64-bit Q Number Q31.32
    Qf64,
    /// `U` 16-byte UTC Date and Time string
    Utc,
    /// `?` data structure is complex, see `TYPE`
    Complex,
    /// `\0` nested metadata, i.e. container for other KLV entries
    Nested,
    /// Not in the GPMF documentation. Kept rather than rejected,
    /// framing is validated via FourCC.
    Unknown(u8),
}

impl From<u8> for ValueType {
    fn from(value: u8) -> Self {
        match value {
            b'b' => Self::SInt8,
            b'B' => Self::UInt8,
            b'c' => Self::Ascii,
            b's' => Self::SInt16,
            b'S' => Self::UInt16,
            b'l' => Self::SInt32,
            b'L' => Self::UInt32,
            b'f' => Self::Float32,
            b'd' => Self::Float64,
            b'F' => Self::FourCC,
            b'G' => Self::Guid,
            b'j' => Self::SInt64,
            b'J' => Self::UInt64,
            b'q' => Self::Qf32,
            b'Q' => Self::Qf64,
            b'U' => Self::Utc,
            b'?' => Self::Complex,
            0 => Self::Nested,
            b => Self::Unknown(b),
        }
    }
}

impl ValueType {
    pub fn is_nested(&self) -> bool {
        self == &Self::Nested
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::SInt8 => b'b',
            Self::UInt8 => b'B',
            Self::Ascii => b'c',
            Self::SInt16 => b's',
            Self::UInt16 => b'S',
            Self::SInt32 => b'l',
            Self::UInt32 => b'L',
            Self::Float32 => b'f',
            Self::Float64 => b'd',
            Self::FourCC => b'F',
            Self::Guid => b'G',
            Self::SInt64 => b'j',
            Self::UInt64 => b'J',
            Self::Qf32 => b'q',
            Self::Qf64 => b'Q',
            Self::Utc => b'U',
            Self::Complex => b'?',
            Self::Nested => 0,
            Self::Unknown(b) => *b,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nested => write!(f, "nested"),
            Self::Unknown(b) => write!(f, "unknown(0x{b:02x})"),
            t => write!(f, "{}", t.as_u8() as char),
        }
    }
}
