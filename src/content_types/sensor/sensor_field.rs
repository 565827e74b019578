use std::fmt::Display;
use std::io::Cursor;

use binrw::BinReaderExt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::content_types::check_len;
use crate::gpmf::ScaleRegistry;
use crate::GpmfError;

/// Generic 3-axis sensor sample for
/// - Accelerometer (acceleration, m/s2)
/// - Gyroscrope (rotation, rad/s)
/// - Magnetometer (µT)
///
/// Axes are kept in logged order, which differs between models.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SensorField {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Display for SensorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<x: {:>3.08}, y: {:>3.08}, z: {:>3.08}>", self.x, self.y, self.z)
    }
}

impl SensorField {
    /// Byte size of one raw sample, 3 x `i16`.
    pub const SIZE: usize = 6;

    /// Decode one raw sample. All three axes share the first scale divisor.
    pub fn from_raw(bytes: &[u8], scale: &ScaleRegistry) -> Result<Self, GpmfError> {
        check_len(bytes, Self::SIZE)?;
        let [divisor] = scale.divisors::<1>()?;

        let mut cursor = Cursor::new(bytes);
        let x: i16 = cursor.read_be()?;
        let y: i16 = cursor.read_be()?;
        let z: i16 = cursor.read_be()?;

        Ok(Self {
            x: x as f64 / divisor,
            y: y as f64 / divisor,
            z: z as f64 / divisor,
        })
    }
}
