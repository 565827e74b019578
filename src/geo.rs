//! Great-circle helpers. Coordinates are `(latitude, longitude)` in degrees.

/// Initial bearing (forward azimuth) from `from` to `to`,
/// degrees in `(-180, 180]`.
pub(crate) fn initial_bearing(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());
    let dlon = lon2 - lon1;

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    y.atan2(x).to_degrees()
}

/// Bearing normalized to `[0, 360)`.
pub(crate) fn normalize_bearing(bearing: f64) -> f64 {
    let normalized = if bearing < 0.0 { bearing + 360.0 } else { bearing };
    // -1e-14 + 360.0 rounds to 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
