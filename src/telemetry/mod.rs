//! Interval records and the timestamped GPS output built from them.

mod heading;
mod interval;
mod telemetry;

pub use interval::IntervalRecord;
pub use telemetry::{Telemetry, TelemetryOptions};
