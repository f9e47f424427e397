//! Geographic points and coordinate-list helpers.
//!
//! - `clone_lat_lng(s)`: independent copies used as edit backups. Restoring a
//!   backup is a plain move of the snapshot back into the live shape.
//! - `GeoPoint::distance_to`, `path_length`: great-circle distances used for the
//!   running length shown while a line is being drawn.

/// Sphere radius (meters) shared by distance and area formulas (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Degrees → radians.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// A geographic coordinate in degrees.
///
/// Invariants:
/// - `lat` in [-90, 90]; `lng` is not wrapped (callers may wrap).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite coordinates with latitude inside [-90, 90].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && (-90.0..=90.0).contains(&self.lat)
    }

    /// Great-circle distance in meters (haversine on a sphere of `EARTH_RADIUS`).
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat) * DEG_TO_RAD;
        let d_lng = (other.lng - self.lng) * DEG_TO_RAD;
        let lat1 = self.lat * DEG_TO_RAD;
        let lat2 = other.lat * DEG_TO_RAD;
        let sin1 = (d_lat / 2.0).sin();
        let sin2 = (d_lng / 2.0).sin();
        let a = sin1 * sin1 + sin2 * sin2 * lat1.cos() * lat2.cos();
        EARTH_RADIUS * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// `(lat, lng)` tuple.
    #[inline]
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Copy of a single point.
#[inline]
pub fn clone_lat_lng(p: &GeoPoint) -> GeoPoint {
    GeoPoint::new(p.lat, p.lng)
}

/// Element-wise copy into fresh storage; order and length preserved.
pub fn clone_lat_lngs(ps: &[GeoPoint]) -> Vec<GeoPoint> {
    ps.iter().map(clone_lat_lng).collect()
}

/// Sum of great-circle distances between consecutive points (meters).
/// Zero for fewer than two points.
pub fn path_length(ps: &[GeoPoint]) -> f64 {
    ps.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
