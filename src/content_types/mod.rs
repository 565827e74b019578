//! Typed samples decoded from fixed-size GPMF payload windows.
//!
//! Codecs are pure: they read the scale registry but never change it.

pub mod gps;
pub mod sensor;

use std::io::Cursor;

use binrw::BinReaderExt;
use time::PrimitiveDateTime;

use crate::constants::GPSU_LENGTH;
use crate::gpmf::{parse_gpsu, ScaleRegistry};
use crate::{FourCC, GpmfError};

pub use gps::{Gps, Gps5, GoProPoint, GpsFix};
pub use sensor::{SensorField, SensorType};

/// A single decoded sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Accelerometer(SensorField),
    Gyroscope(SensorField),
    Magnetometer(SensorField),
    Gps5(Gps5),
    /// `GPSU`, UTC.
    GpsTime(PrimitiveDateTime),
    GpsFix(GpsFix),
    /// `GPSP`, centimeters.
    GpsAccuracy(u16),
    /// `TMPC`, °C.
    Temperature(f32),
    /// `TSMP`, total samples delivered since record start.
    SampleCount(u32),
}

impl Sample {
    /// Decode one element of a `fourcc` entry.
    /// Returns `None` for FourCC that do not carry samples.
    pub fn decode(
        fourcc: FourCC,
        bytes: &[u8],
        scale: &ScaleRegistry,
    ) -> Result<Option<Self>, GpmfError> {
        let sample = match fourcc {
            FourCC::ACCL | FourCC::GYRO | FourCC::MAGN => {
                let field = SensorField::from_raw(bytes, scale)?;
                match SensorType::from_fourcc(fourcc) {
                    Some(SensorType::Accelerometer) => Self::Accelerometer(field),
                    Some(SensorType::Gyroscope) => Self::Gyroscope(field),
                    Some(SensorType::Magnetometer) => Self::Magnetometer(field),
                    None => return Ok(None),
                }
            }
            FourCC::GPS5 => Self::Gps5(Gps5::from_raw(bytes, scale)?),
            FourCC::GPSU => Self::GpsTime(parse_gpsu(bytes)?),
            FourCC::GPSF => Self::GpsFix(GpsFix::from_raw(bytes)?),
            FourCC::GPSP => Self::GpsAccuracy(gps::accuracy_from_raw(bytes)?),
            FourCC::TMPC => Self::Temperature(temperature_from_raw(bytes)?),
            FourCC::TSMP => Self::SampleCount(sample_count_from_raw(bytes)?),

            FourCC::DEVC
            | FourCC::DVID
            | FourCC::DVNM
            | FourCC::STRM
            | FourCC::STNM
            | FourCC::SCAL
            | FourCC::SIUN
            | FourCC::UNIT
            | FourCC::TYPE
            | FourCC::EMPT
            | FourCC::TICK
            | FourCC::ALLD
            | FourCC::FACE
            | FourCC::FCNM
            | FourCC::ISOE
            | FourCC::ISOG
            | FourCC::SHUT
            | FourCC::WBAL
            | FourCC::WRGB
            | FourCC::GPRO
            | FourCC::HD5 => return Ok(None),
        };

        Ok(Some(sample))
    }
}

impl Sample {
    /// Byte width of a single raw element of `fourcc`,
    /// `None` for FourCC that do not carry samples.
    pub fn width(fourcc: FourCC) -> Option<usize> {
        if SensorType::from_fourcc(fourcc).is_some() {
            return Some(SensorField::SIZE);
        }
        match fourcc {
            FourCC::GPS5 => Some(Gps5::SIZE),
            FourCC::GPSU => Some(GPSU_LENGTH),
            FourCC::GPSF => Some(GpsFix::SIZE),
            FourCC::GPSP => Some(gps::ACCURACY_SIZE),
            FourCC::TMPC | FourCC::TSMP => Some(4),
            _ => None,
        }
    }
}

/// Raw sample windows have fixed sizes.
/// FourCC and offset are filled in by the decoder.
pub(crate) fn check_len(bytes: &[u8], expected: usize) -> Result<(), GpmfError> {
    if bytes.len() != expected {
        return Err(GpmfError::InvalidLength {
            fourcc: String::new(),
            offset: 0,
            expected,
            got: bytes.len(),
        });
    }
    Ok(())
}

/// `TMPC`, big endian IEEE-754 `f32`, already in °C.
pub(crate) fn temperature_from_raw(bytes: &[u8]) -> Result<f32, GpmfError> {
    check_len(bytes, 4)?;
    Cursor::new(bytes).read_be::<f32>().map_err(|err| err.into())
}

/// `TSMP`, big endian `u32`.
pub(crate) fn sample_count_from_raw(bytes: &[u8]) -> Result<u32, GpmfError> {
    check_len(bytes, 4)?;
    Cursor::new(bytes).read_be::<u32>().map_err(|err| err.into())
}
