use time::PrimitiveDateTime;

use super::{GoProPoint, GpsFix};

/// Timestamped GPS points for a whole stream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Gps(pub Vec<GoProPoint>);

impl Gps {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoProPoint> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&GoProPoint> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&GoProPoint> {
        self.0.last()
    }

    /// Returns the datetime of the first logged point.
    pub fn t0(&self) -> Option<PrimitiveDateTime> {
        self.first().and_then(|p| p.datetime().ok())
    }

    /// Returns the datetime of the last logged point.
    pub fn t_last(&self) -> Option<PrimitiveDateTime> {
        self.last().and_then(|p| p.datetime().ok())
    }

    /// Prune points logged with a satellite lock below `min_fix`.
    ///
    /// Without a lock the camera logs zeros or the last known position,
    /// so `min_fix` should be at least 2 to keep only real positions.
    /// Valid values are 0 (no lock), 2 (2D lock), 3 (3D lock).
    ///
    /// Fix is only set on the first point of each interval,
    /// later points are judged by the most recent fix seen.
    /// Points before any fix was logged are pruned.
    pub fn prune(self, min_fix: u32) -> Self {
        let mut current: Option<GpsFix> = None;
        Self(
            self.0
                .into_iter()
                .filter(|p| {
                    if p.fix.is_some() {
                        current = p.fix;
                    }
                    current.map(|f| f.as_u32() >= min_fix).unwrap_or(false)
                })
                .collect(),
        )
    }
}

impl IntoIterator for Gps {
    type Item = GoProPoint;
    type IntoIter = std::vec::IntoIter<GoProPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<GoProPoint> for Gps {
    fn from_iter<T: IntoIterator<Item = GoProPoint>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp_micros: i64, fix: Option<GpsFix>) -> GoProPoint {
        GoProPoint {
            latitude: 59.0,
            longitude: 18.0,
            altitude: 0.0,
            speed2d: 0.0,
            speed3d: 0.0,
            timestamp_micros,
            heading: 0.0,
            fix,
            accuracy: None,
            temperature: None,
        }
    }

    #[test]
    fn prune_carries_fix_forward() {
        let gps = Gps(vec![
            point(0, None),
            point(1, Some(GpsFix::NoLock)),
            point(2, None),
            point(3, Some(GpsFix::Lock3D)),
            point(4, None),
            point(5, Some(GpsFix::Lock2D)),
        ]);
        let kept = gps
            .prune(3)
            .iter()
            .map(|p| p.timestamp_micros)
            .collect::<Vec<_>>();
        assert_eq!(kept, vec![3, 4]);
    }

    #[test]
    fn t0_from_first_point() {
        let gps = Gps(vec![point(1_500_000, None), point(2_000_000, None)]);
        assert_eq!(gps.t0(), Some(time::macros::datetime!(1970-01-01 0:00:01.5)));
        assert_eq!(gps.t_last(), Some(time::macros::datetime!(1970-01-01 0:00:02)));
    }
}
