//! GPS samples (`GPS5`, `GPSF`, `GPSP`) and the timestamped output point.

mod gps;

use std::io::Cursor;

use binrw::BinReaderExt;
use time::{OffsetDateTime, PrimitiveDateTime};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::content_types::check_len;
use crate::gpmf::ScaleRegistry;
use crate::GpmfError;

pub use gps::Gps;

/// Single raw `GPS5` position, scaled.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gps5 {
    /// Latitude, degrees.
    pub latitude: f64,
    /// Longitude, degrees.
    pub longitude: f64,
    /// Altitude, meters (WGS 84).
    pub altitude: f64,
    /// 2D ground speed, m/s.
    pub speed2d: f64,
    /// 3D speed, m/s.
    pub speed3d: f64,
}

impl Gps5 {
    /// Byte size of one raw sample, 5 x `i32`.
    pub const SIZE: usize = 20;

    /// Decode one `GPS5` sample. Each field has its own divisor,
    /// in the same order as the fields.
    pub fn from_raw(bytes: &[u8], scale: &ScaleRegistry) -> Result<Self, GpmfError> {
        check_len(bytes, Self::SIZE)?;
        let [lat_scl, lon_scl, alt_scl, sp2d_scl, sp3d_scl] = scale.divisors::<5>()?;

        let mut cursor = Cursor::new(bytes);
        let raw: [i32; 5] = [
            cursor.read_be()?,
            cursor.read_be()?,
            cursor.read_be()?,
            cursor.read_be()?,
            cursor.read_be()?,
        ];

        Ok(Self {
            latitude: raw[0] as f64 / lat_scl,
            longitude: raw[1] as f64 / lon_scl,
            altitude: raw[2] as f64 / alt_scl,
            speed2d: raw[3] as f64 / sp2d_scl,
            speed3d: raw[4] as f64 / sp3d_scl,
        })
    }
}

/// GPS satellite lock (`GPSF`).
/// GoPro logs 0, 2, or 3, other values are kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum GpsFix {
    NoLock,
    Lock2D,
    Lock3D,
    Other(u32),
}

impl From<u32> for GpsFix {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::NoLock,
            2 => Self::Lock2D,
            3 => Self::Lock3D,
            v => Self::Other(v),
        }
    }
}

impl GpsFix {
    /// Byte size of a raw value, `u32`.
    pub const SIZE: usize = 4;

    pub fn from_raw(bytes: &[u8]) -> Result<Self, GpmfError> {
        check_len(bytes, Self::SIZE)?;
        let value: u32 = Cursor::new(bytes).read_be()?;
        Ok(Self::from(value))
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            Self::NoLock => 0,
            Self::Lock2D => 2,
            Self::Lock3D => 3,
            Self::Other(v) => *v,
        }
    }
}

/// Byte size of a raw `GPSP` value, `u16`.
pub const ACCURACY_SIZE: usize = 2;

/// Position accuracy (`GPSP`) in centimeters.
pub fn accuracy_from_raw(bytes: &[u8]) -> Result<u16, GpmfError> {
    check_len(bytes, ACCURACY_SIZE)?;
    Cursor::new(bytes).read_be::<u16>().map_err(|err| err.into())
}

/// Timestamped GPS point with derived heading.
///
/// `fix`, `accuracy` and `temperature` are logged once per interval
/// and only set on the first point of each interval. `None` on
/// later points means "unchanged".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GoProPoint {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Altitude.
    pub altitude: f64,
    /// 2D speed.
    pub speed2d: f64,
    /// 3D speed.
    pub speed3d: f64,
    /// Microseconds since Unix epoch, interpolated from `GPSU`.
    pub timestamp_micros: i64,
    /// Heading, degrees in `[0, 360)`.
    pub heading: f64,
    /// GPS fix, `GPSF`.
    pub fix: Option<GpsFix>,
    /// Position accuracy in cm, `GPSP`.
    pub accuracy: Option<u16>,
    /// Camera temperature in °C, `TMPC`.
    pub temperature: Option<f32>,
}

impl std::fmt::Display for GoProPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\
            latitude:    {}
            longitude:   {}
            altitude:    {}
            speed2d:     {}
            speed3d:     {}
            timestamp:   {}
            heading:     {}
            fix:         {:?}
            accuracy:    {:?}
            temperature: {:?}",
            self.latitude,
            self.longitude,
            self.altitude,
            self.speed2d,
            self.speed3d,
            self.timestamp_micros,
            self.heading,
            self.fix,
            self.accuracy,
            self.temperature,
        )
    }
}

impl GoProPoint {
    /// Timestamp as UTC datetime.
    pub fn datetime(&self) -> Result<PrimitiveDateTime, GpmfError> {
        let odt = OffsetDateTime::from_unix_timestamp_nanos(self.timestamp_micros as i128 * 1000)
            .map_err(|_| GpmfError::InvalidTimestamp(self.timestamp_micros.to_string()))?;
        Ok(PrimitiveDateTime::new(odt.date(), odt.time()))
    }
}
