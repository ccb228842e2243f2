//! Great-circle distance and short distance labels.

use crate::geo::Coordinate;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between `a` and `b` in meters.
///
/// Symmetric in its arguments and exactly zero for identical points.
/// NaN components propagate to a NaN result; validate input upstream.
#[must_use]
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Formats a distance as `"350m"` below one kilometer and `"2.3km"` above.
///
/// Meter values are rounded to the nearest integer; a value that rounds to
/// 1000 switches to the kilometer form so `"1000m"` is never produced.
/// Kilometers always carry exactly one decimal digit.
///
/// `meters` must be finite and non-negative.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    debug_assert!(
        meters.is_finite() && meters >= 0.0,
        "format_distance requires a finite, non-negative distance, got {meters}"
    );

    let rounded = meters.round();
    if rounded < 1000.0 {
        format!("{rounded:.0}m")
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
