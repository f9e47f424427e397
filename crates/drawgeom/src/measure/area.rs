use crate::latlng::{GeoPoint, DEG_TO_RAD, EARTH_RADIUS};

use super::MeasurementUnit;

/// Unsigned area (m²) of the ring closed from its last point back to the first.
///
/// Sums `Δlng · (2 + sin lat1 + sin lat2)` over the edges and scales by `R²/2`.
/// Accuracy degrades for very large rings and across the antimeridian.
/// Rings with two or fewer points have area exactly `0`.
pub fn geodesic_area(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    if n <= 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];
        sum += ((p2.lng - p1.lng) * DEG_TO_RAD)
            * (2.0 + (p1.lat * DEG_TO_RAD).sin() + (p2.lat * DEG_TO_RAD).sin());
    }
    (sum * EARTH_RADIUS * EARTH_RADIUS / 2.0).abs()
}

/// Area text for a polygon being drawn; `None` until the ring is a valid shape (3+ points).
pub fn polygon_tooltip(ring: &[GeoPoint], unit: MeasurementUnit) -> Option<String> {
    if ring.len() < 3 {
        return None;
    }
    let area = geodesic_area(ring);
    tracing::trace!(points = ring.len(), area, "polygon_tooltip");
    Some(unit.format_area(area))
}
