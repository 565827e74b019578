//! Errors raised while decoding a GPMF stream.
//!
//! All decode errors are final: a misread field shifts every following byte offset,
//! so the pass stops rather than trying to resynchronise.
//! `UnexpectedEof` is the exception, it marks a truncated stream and is handled
//! by the decoder as a regular end of data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpmfError {
    /// FourCC not in the recognized set.
    #[error("Unknown FourCC '{fourcc}' ({bytes:02x?}) at offset {offset}.")]
    UnknownTag {
        fourcc: String,
        bytes: [u8; 4],
        offset: u64,
    },
    /// Stream ended before a complete structure could be read.
    #[error("Unexpected end of stream at offset {offset}: expected {expected} bytes, got {got}.")]
    UnexpectedEof {
        offset: u64,
        expected: u64,
        got: u64,
    },
    /// Sample payload size does not match the size its type requires.
    #[error("Invalid length for '{fourcc}' at offset {offset}: expected {expected} bytes, got {got}.")]
    InvalidLength {
        fourcc: String,
        offset: u64,
        expected: usize,
        got: usize,
    },
    /// `SCAL` element width other than 2 or 4 bytes.
    #[error("Invalid SCAL element width {0}, expected 2 or 4.")]
    InvalidScaleWidth(u8),
    /// Fewer scale divisors than the sample type requires.
    #[error("Scale underflow: divisor at index {index} requested, but only {len} present.")]
    ScaleUnderflow {
        index: usize,
        len: usize,
    },
    /// `GPSU` value could not be parsed as `YYMMDDhhmmss.fff`.
    #[error("Invalid GPSU timestamp '{0}'.")]
    InvalidTimestamp(String),
    /// Binary read error.
    #[error("Failed to read binary value: {0}")]
    BinReadError(#[from] binrw::Error),
    /// Converted `std::io::Error`.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GpmfError {
    /// Attach stream position and FourCC to errors raised by the
    /// position-agnostic sample codecs.
    pub(crate) fn locate(self, fourcc: &str, at: u64) -> Self {
        match self {
            Self::InvalidLength { expected, got, .. } => Self::InvalidLength {
                fourcc: fourcc.to_owned(),
                offset: at,
                expected,
                got,
            },
            other => other,
        }
    }

    /// Returns `true` for the truncation marker,
    /// which ends a pass without failing it.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
