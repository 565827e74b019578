//! Heading derived from consecutive GPS positions.

use crate::geo::{initial_bearing, normalize_bearing};

/// Tracks the last position and the last heading logged at speed.
///
/// Bearings between positions logged at low speed mostly reflect GPS drift,
/// so below `min_speed` the last trusted heading is repeated instead.
#[derive(Debug, Clone)]
pub(crate) struct HeadingTracker {
    last_point: (f64, f64),
    last_heading: f64,
    min_speed: f64,
}

impl HeadingTracker {
    pub(crate) fn new(seed: (f64, f64), initial_heading: f64, min_speed: f64) -> Self {
        Self {
            last_point: seed,
            last_heading: initial_heading,
            min_speed,
        }
    }

    /// Heading in `[0, 360)` for the position `(latitude, longitude)`.
    /// The position always becomes the new reference point.
    pub(crate) fn update(&mut self, latitude: f64, longitude: f64, speed2d: f64) -> f64 {
        let bearing = normalize_bearing(initial_bearing(self.last_point, (latitude, longitude)));
        self.last_point = (latitude, longitude);
        if speed2d > self.min_speed {
            self.last_heading = bearing;
        }
        self.last_heading
    }
}
