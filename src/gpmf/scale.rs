//! Scale divisors (`SCAL`) in effect for the samples that follow.
//!
//! Raw sensor and GPS values are integers that must be divided by the
//! corresponding `SCAL` value to get physical units. A new `SCAL` entry
//! always replaces the previous divisors.

use std::io::Cursor;

use binrw::{BinReaderExt, BinResult};

use crate::GpmfError;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScaleRegistry(Vec<u32>);

impl ScaleRegistry {
    /// Replace current divisors with those in `payload`,
    /// a packed array of big endian `u16` (`width == 2`) or `u32` (`width == 4`).
    pub fn set(&mut self, payload: &[u8], width: u8) -> Result<(), GpmfError> {
        let w = width as usize;
        if w != 2 && w != 4 {
            return Err(GpmfError::InvalidScaleWidth(width));
        }
        if payload.len() % w != 0 {
            return Err(GpmfError::InvalidLength {
                fourcc: "SCAL".to_owned(),
                offset: 0,
                expected: (payload.len() / w + 1) * w,
                got: payload.len(),
            });
        }

        let mut cursor = Cursor::new(payload);
        let divisors = (0..payload.len() / w)
            .map(|_| match w {
                2 => cursor.read_be::<u16>().map(u32::from),
                _ => cursor.read_be::<u32>(),
            })
            .collect::<BinResult<Vec<_>>>()?;

        self.0 = divisors;

        Ok(())
    }

    /// Divisor at `index`.
    pub fn get(&self, index: usize) -> Result<u32, GpmfError> {
        self.0
            .get(index)
            .copied()
            .ok_or(GpmfError::ScaleUnderflow {
                index,
                len: self.0.len(),
            })
    }

    /// First `N` divisors as `f64`, for sample types with `N` scaled fields.
    pub fn divisors<const N: usize>(&self) -> Result<[f64; N], GpmfError> {
        if self.0.len() < N {
            return Err(GpmfError::ScaleUnderflow {
                index: N - 1,
                len: self.0.len(),
            });
        }
        let mut divisors = [0.0; N];
        divisors
            .iter_mut()
            .zip(self.0.iter())
            .for_each(|(d, s)| *d = *s as f64);
        Ok(divisors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}
