//! Samples logged between two interval boundaries, roughly one second of data.

use time::PrimitiveDateTime;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::content_types::{Gps5, GpsFix, Sample, SensorField, SensorType};

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IntervalRecord {
    pub accelerometer: Vec<SensorField>,
    pub gyroscope: Vec<SensorField>,
    pub magnetometer: Vec<SensorField>,
    /// Positions, all sharing `time`, `fix`, `accuracy`.
    pub gps: Vec<Gps5>,
    /// `GPSU` anchor. Required for timestamping positions.
    pub time: Option<PrimitiveDateTime>,
    pub fix: Option<GpsFix>,
    /// Position accuracy, cm.
    pub accuracy: Option<u16>,
    /// °C.
    pub temperature: Option<f32>,
    /// Most recent `TSMP`, diagnostic only.
    pub sample_count: Option<u32>,
}

impl IntervalRecord {
    /// Fold a sample into the interval.
    ///
    /// Single-value fields (`GPSU`, `GPSF`, `GPSP`, `TMPC`, `TSMP`) are
    /// overwritten. Returns the previous anchor if a `GPSU` replaced it.
    pub fn push(&mut self, sample: Sample) -> Option<PrimitiveDateTime> {
        match sample {
            Sample::Accelerometer(s) => self.accelerometer.push(s),
            Sample::Gyroscope(s) => self.gyroscope.push(s),
            Sample::Magnetometer(s) => self.magnetometer.push(s),
            Sample::Gps5(p) => self.gps.push(p),
            Sample::GpsTime(t) => return self.time.replace(t),
            Sample::GpsFix(f) => self.fix = Some(f),
            Sample::GpsAccuracy(a) => self.accuracy = Some(a),
            Sample::Temperature(t) => self.temperature = Some(t),
            Sample::SampleCount(c) => self.sample_count = Some(c),
        }
        None
    }

    /// Sensor samples of the given type.
    pub fn sensor(&self, sensor: SensorType) -> &[SensorField] {
        match sensor {
            SensorType::Accelerometer => &self.accelerometer,
            SensorType::Gyroscope => &self.gyroscope,
            SensorType::Magnetometer => &self.magnetometer,
        }
    }

    /// Has a `GPSU` timestamp.
    pub fn is_anchored(&self) -> bool {
        self.time.is_some()
    }

    /// Nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.accelerometer.is_empty()
            && self.gyroscope.is_empty()
            && self.magnetometer.is_empty()
            && self.gps.is_empty()
            && self.time.is_none()
            && self.fix.is_none()
            && self.accuracy.is_none()
            && self.temperature.is_none()
            && self.sample_count.is_none()
    }
}
