//! GPMF Four CC, i.e. general stream identifier.
//!
//! Only FourCC in the recognized set below can be tokenized.
//! Anything else aborts the decode with `GpmfError::UnknownTag`,
//! since a FourCC outside the set almost always means the framing
//! has drifted rather than that a new stream type appeared.
//! Adding a stream type means adding a variant here, which in turn
//! forces the decoder's tag dispatch to handle it.

use std::fmt::Display;

use crate::GpmfError;

/// FourCC enum. Descriptions lifted from official GPMF documentation (<https://github.com/gopro/gpmf-parser>)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FourCC {
    // FOURCC RESERVED FOR GPMF STRUCTURE
    /// unique device source for metadata
    DEVC,
    /// device/track ID
    /// Auto generated unique-ID for managing a large number of connect devices.
    /// Used as interval boundary.
    DVID,
    /// device name
    DVNM,
    /// Nested signal stream of metadata/telemetry
    STRM,
    /// Stream name
    STNM,
    /// Scaling factor (divisor)
    SCAL,
    /// Standard Units (like SI)
    SIUN,
    /// Display units
    UNIT,
    /// Typedefs for complex structures
    TYPE,
    /// Total Samples delivered
    TSMP,
    /// Empty payload count
    EMPT,
    /// Used as a time stamp for the data in the stream
    TICK,

    // DEVICE/DATA SPECIFIC FOURCC
    /// 3-axis accelerometer, m/s²
    ACCL,
    /// 3-axis gyroscope, rad/s
    GYRO,
    /// Magnetometer, µT
    MAGN,
    /// latitude, longitude, altitude (WGS 84), 2D ground speed, and 3D speed
    GPS5,
    /// GPS Fix: 0 - no lock, 2 or 3 - 2D or 3D Lock
    GPSF,
    /// GPS Precision, logged as position accuracy in cm
    GPSP,
    /// UTC time and data from GPS
    GPSU,
    /// Temperature, °C
    TMPC,
    /// Auto Low Light frame Duration
    ALLD,
    /// Face detection boundaring boxes
    FACE,
    /// Faces counted per frame
    FCNM,
    /// Sensor ISO
    ISOE,
    /// Image sensor gain
    ISOG,
    /// Exposure time
    SHUT,
    /// White Balance in Kelvin
    WBAL,
    /// White Balance RGB gains
    WRGB,
    /// Hero5 firmware header
    GPRO,
    /// Hero5 firmware header, `HD5.`
    HD5,
}

impl FourCC {
    /// Generate FourCC from the four bytes read at `offset`.
    pub fn from_bytes(bytes: [u8; 4], offset: u64) -> Result<Self, GpmfError> {
        let fourcc = match &bytes {
            b"DEVC" => Self::DEVC,
            b"DVID" => Self::DVID,
            b"DVNM" => Self::DVNM,
            b"STRM" => Self::STRM,
            b"STNM" => Self::STNM,
            b"SCAL" => Self::SCAL,
            b"SIUN" => Self::SIUN,
            b"UNIT" => Self::UNIT,
            b"TYPE" => Self::TYPE,
            b"TSMP" => Self::TSMP,
            b"EMPT" => Self::EMPT,
            b"TICK" => Self::TICK,

            b"ACCL" => Self::ACCL,
            b"GYRO" => Self::GYRO,
            b"MAGN" => Self::MAGN,
            b"GPS5" => Self::GPS5,
            b"GPSF" => Self::GPSF,
            b"GPSP" => Self::GPSP,
            b"GPSU" => Self::GPSU,
            b"TMPC" => Self::TMPC,
            b"ALLD" => Self::ALLD,
            b"FACE" => Self::FACE,
            b"FCNM" => Self::FCNM,
            b"ISOE" => Self::ISOE,
            b"ISOG" => Self::ISOG,
            b"SHUT" => Self::SHUT,
            b"WBAL" => Self::WBAL,
            b"WRGB" => Self::WRGB,
            b"GPRO" => Self::GPRO,
            b"HD5." => Self::HD5,

            _ => return Err(GpmfError::UnknownTag {
                fourcc: String::from_utf8_lossy(&bytes).to_string(),
                bytes,
                offset,
            }),
        };

        Ok(fourcc)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::DEVC => "DEVC",
            Self::DVID => "DVID",
            Self::DVNM => "DVNM",
            Self::STRM => "STRM",
            Self::STNM => "STNM",
            Self::SCAL => "SCAL",
            Self::SIUN => "SIUN",
            Self::UNIT => "UNIT",
            Self::TYPE => "TYPE",
            Self::TSMP => "TSMP",
            Self::EMPT => "EMPT",
            Self::TICK => "TICK",

            Self::ACCL => "ACCL",
            Self::GYRO => "GYRO",
            Self::MAGN => "MAGN",
            Self::GPS5 => "GPS5",
            Self::GPSF => "GPSF",
            Self::GPSP => "GPSP",
            Self::GPSU => "GPSU",
            Self::TMPC => "TMPC",
            Self::ALLD => "ALLD",
            Self::FACE => "FACE",
            Self::FCNM => "FCNM",
            Self::ISOE => "ISOE",
            Self::ISOG => "ISOG",
            Self::SHUT => "SHUT",
            Self::WBAL => "WBAL",
            Self::WRGB => "WRGB",
            Self::GPRO => "GPRO",
            Self::HD5 => "HD5.",
        }
    }

    /// The FourCC that closes one interval and opens the next.
    ///
    /// `DVID` starts every `DEVC`, which is logged roughly once a second.
    /// This is an observed property of camera output, not something
    /// the GPMF documentation guarantees.
    pub fn is_boundary(&self) -> bool {
        self == &Self::DVID
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
