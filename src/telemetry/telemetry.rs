//! Timestamped GPS points with heading.
//!
//! GPMF logs a single `GPSU` timestamp per interval, while the interval
//! holds 10-18 positions. Each position is timestamped by spreading the
//! interval evenly up to the next anchor, which means an interval can only
//! be finalized once the next anchored interval has been decoded.
//!
//! ```rs
//! use gpmf_telemetry::Telemetry;
//!
//! fn main() -> Result<(), gpmf_telemetry::GpmfError> {
//!     let bytes = std::fs::read("GOPRO_VIDEO.gpmf")?;
//!     let gps = Telemetry::from_slice(&bytes).into_gps()?.prune(2);
//!     for point in gps.iter() {
//!         println!("{point}");
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::io::{Cursor, Read};

use log::{debug, warn};
use time::PrimitiveDateTime;

use crate::constants::{HEADING_DEFAULT, HEADING_MIN_SPEED, HEADING_SEED_POINT};
use crate::content_types::{GoProPoint, Gps};
use crate::gpmf::{sample_offset_ms, unix_micros, Decoder};
use crate::GpmfError;

use super::heading::HeadingTracker;
use super::IntervalRecord;

/// Heading derivation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryOptions {
    /// 2D speed in m/s a position must exceed for its bearing to become the heading.
    pub min_heading_speed: f64,
    /// Reference position for the first bearing, `(latitude, longitude)`.
    pub seed_point: (f64, f64),
}

impl Default for TelemetryOptions {
    fn default() -> Self {
        Self {
            min_heading_speed: HEADING_MIN_SPEED,
            seed_point: HEADING_SEED_POINT,
        }
    }
}

pub struct Telemetry<R> {
    decoder: Decoder<R>,
    /// Anchored interval waiting for the next anchor.
    pending: Option<IntervalRecord>,
    /// Finalized points not yet returned.
    queue: VecDeque<GoProPoint>,
    heading: HeadingTracker,
    done: bool,
}

impl<R: Read> Telemetry<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, TelemetryOptions::default())
    }

    pub fn with_options(reader: R, options: TelemetryOptions) -> Self {
        Self {
            decoder: Decoder::new(reader),
            pending: None,
            queue: VecDeque::new(),
            heading: HeadingTracker::new(
                options.seed_point,
                HEADING_DEFAULT,
                options.min_heading_speed,
            ),
            done: false,
        }
    }

    /// Collect all points. Fails on the first decode error,
    /// a truncated stream is not an error.
    pub fn into_gps(self) -> Result<Gps, GpmfError> {
        self.collect()
    }

    /// Timestamp and add heading to the positions in `interval`,
    /// with `next` as the anchor of the following interval.
    fn finalize(&mut self, interval: IntervalRecord, next: Option<PrimitiveDateTime>) {
        let Some(anchor) = interval.time else {
            return;
        };
        let anchor_micros = unix_micros(&anchor);
        let samples = interval.gps.len();

        debug!(
            "finalizing {samples} points anchored at {anchor}, next anchor {next:?}"
        );

        for (index, gps5) in interval.gps.iter().enumerate() {
            let offset_ms = sample_offset_ms(&anchor, next.as_ref(), samples, index);
            let heading = self.heading.update(gps5.latitude, gps5.longitude, gps5.speed2d);
            let first = index == 0;

            self.queue.push_back(GoProPoint {
                latitude: gps5.latitude,
                longitude: gps5.longitude,
                altitude: gps5.altitude,
                speed2d: gps5.speed2d,
                speed3d: gps5.speed3d,
                timestamp_micros: anchor_micros + offset_ms * 1000,
                heading,
                fix: interval.fix.filter(|_| first),
                accuracy: interval.accuracy.filter(|_| first),
                temperature: interval.temperature.filter(|_| first),
            });
        }
    }
}

impl Telemetry<Cursor<Vec<u8>>> {
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(Cursor::new(bytes.to_owned()))
    }

    pub fn from_slice_with_options(bytes: &[u8], options: TelemetryOptions) -> Self {
        Self::with_options(Cursor::new(bytes.to_owned()), options)
    }
}

impl<R: Read> Iterator for Telemetry<R> {
    type Item = Result<GoProPoint, GpmfError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.queue.pop_front() {
                return Some(Ok(point));
            }
            if self.done {
                return None;
            }

            match self.decoder.next() {
                Some(Ok(interval)) => {
                    if !interval.is_anchored() {
                        if !interval.gps.is_empty() {
                            warn!(
                                "Interval without GPSU, skipping {} positions.",
                                interval.gps.len()
                            );
                        }
                        continue;
                    }
                    let next = interval.time;
                    if let Some(previous) = self.pending.replace(interval) {
                        self.finalize(previous, next);
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    self.pending = None;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    if let Some(last) = self.pending.take() {
                        self.finalize(last, None);
                    }
                }
            }
        }
    }
}
