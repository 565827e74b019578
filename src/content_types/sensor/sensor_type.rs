use std::fmt::Display;

use crate::FourCC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorType {
    Accelerometer,
    Gyroscope,
    Magnetometer,
}

impl Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorType::Accelerometer => write!(f, "Accelerometer"),
            SensorType::Gyroscope => write!(f, "Gyroscope"),
            SensorType::Magnetometer => write!(f, "Magnetometer"),
        }
    }
}

impl SensorType {
    pub const ALL: [SensorType; 3] = [Self::Accelerometer, Self::Gyroscope, Self::Magnetometer];

    /// FourCC of the raw data array.
    pub fn fourcc(&self) -> FourCC {
        match self {
            Self::Accelerometer => FourCC::ACCL,
            Self::Gyroscope => FourCC::GYRO,
            Self::Magnetometer => FourCC::MAGN,
        }
    }

    /// Sensor logged under `fourcc`, if any.
    pub fn from_fourcc(fourcc: FourCC) -> Option<Self> {
        Self::ALL.into_iter().find(|sensor| sensor.fourcc() == fourcc)
    }
}
