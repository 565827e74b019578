//! KLV (key-length-value) framing.
//!
//! Every GPMF entry starts with an 8 byte header:
//! ```text
//! | FourCC (4) | type (1) | size (1) | repeat (2, big endian) |
//! ```
//! followed by `size * repeat` bytes of payload, zero padded to
//! 32-bit alignment. Nested entries (type `0`) carry no payload of
//! their own, their "payload" is the run of KLV entries that follows.

use std::io::Cursor;

use binrw::BinRead;

use crate::constants::{KLV_ALIGNMENT, KLV_HEADER_SIZE};
use crate::GpmfError;

use super::{FourCC, ValueType};

/// The four descriptor bytes following a FourCC.
#[derive(Debug, BinRead)]
#[br(big)]
pub(crate) struct KlvDescriptor {
    pub value_type: u8,
    pub size: u8,
    pub repeat: u16,
}

impl KlvDescriptor {
    pub(crate) fn from_bytes(bytes: [u8; 4]) -> Result<Self, GpmfError> {
        Self::read(&mut Cursor::new(bytes)).map_err(|err| err.into())
    }

    /// Declared payload length in bytes.
    pub(crate) fn len(&self) -> usize {
        self.size as usize * self.repeat as usize
    }
}

/// Number of zero bytes following a payload of length `len`.
pub(crate) fn padding(len: usize) -> usize {
    (KLV_ALIGNMENT - len % KLV_ALIGNMENT) % KLV_ALIGNMENT
}

/// Single framed KLV entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub fourcc: FourCC,
    pub value_type: ValueType,
    /// Size in bytes of a single element.
    pub size: u8,
    /// Number of elements.
    pub repeat: u16,
    /// Raw payload. Empty for nested entries.
    pub payload: Vec<u8>,
    /// Stream position of the FourCC.
    pub offset: u64,
    /// Padding bytes skipped after the payload.
    pub padding: usize,
    /// Number of enclosing containers (`DEVC`, `STRM`).
    pub depth: usize,
}

impl Token {
    /// Returns `true` if this entry only groups the entries that follow.
    pub fn is_container(&self) -> bool {
        self.value_type.is_nested()
    }

    /// Bytes consumed from the stream for this entry,
    /// header, payload and padding included.
    pub fn framed_len(&self) -> usize {
        KLV_HEADER_SIZE + self.payload.len() + self.padding
    }

    /// Iterates over the payload in `size`-wide element windows.
    pub fn elements(&self) -> impl Iterator<Item = &[u8]> {
        // size 0 means an empty payload, max(1) only keeps chunks_exact from panicking
        self.payload.chunks_exact((self.size as usize).max(1))
    }
}
