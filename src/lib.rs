//! Decode GoPro GPMF telemetry streams.
//!
//! The stream is read once, front to back, and returned as interval
//! records (roughly one second of sensor and GPS data each) or as
//! timestamped GPS points with heading.
//!
//! Input is a raw GPMF stream, e.g. the telemetry track
//! extracted from a GoPro MP4 with FFmpeg.
//!
//! ```rs
//! use gpmf_telemetry::{Decoder, Telemetry};
//!
//! fn main() -> Result<(), gpmf_telemetry::GpmfError> {
//!     let bytes = std::fs::read("GOPRO_VIDEO.gpmf")?;
//!
//!     // Timestamped GPS points
//!     for point in Telemetry::from_slice(&bytes) {
//!         println!("{}", point?);
//!     }
//!
//!     // Raw intervals, including accelerometer and gyroscope samples
//!     for interval in Decoder::from_slice(&bytes) {
//!         println!("{:?}", interval?.accelerometer);
//!     }
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod content_types;
mod errors;
mod geo;
pub mod gpmf;
pub mod telemetry;
#[cfg(test)]
mod test_utils;

pub use content_types::{GoProPoint, Gps, Gps5, GpsFix, Sample, SensorField, SensorType};
pub use errors::GpmfError;
pub use gpmf::{Decoder, FourCC, ScaleRegistry, Token, Tokenizer, ValueType};
pub use telemetry::{IntervalRecord, Telemetry, TelemetryOptions};
