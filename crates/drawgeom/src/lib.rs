//! Geometry core for interactive map drawing tools.
//!
//! A drawing/editing UI calls into this crate while the user works:
//! - `intersect`: reject vertices that would make a shape self-intersect.
//! - `measure`: area and distance text for tooltips.
//! - `snap`: project a pointer onto existing paths for split/erase.
//! - `latlng`: backups of coordinate lists before edits, great-circle lengths.
//!
//! Everything here is a pure function over plain values. Intersection and
//! snapping work on planar (already projected) points; measurement works on
//! geographic points. The crate never projects between the two.

pub mod error;
pub mod intersect;
pub mod latlng;
pub mod measure;
pub mod sample;
pub mod snap;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Projected 2-D point (screen or layer coordinates).
pub type PlanarPoint = nalgebra::Vector2<f64>;

pub use error::GeomError;
pub use latlng::GeoPoint;
pub use measure::MeasurementUnit;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::intersect::{
        polygon_intersects_self, polyline_intersects_self, segments_intersect, would_intersect,
    };
    pub use crate::latlng::{clone_lat_lng, clone_lat_lngs, path_length, GeoPoint};
    pub use crate::measure::{geodesic_area, readable_area, readable_distance, MeasurementUnit};
    pub use crate::snap::{
        closest_point_on_path, closest_point_on_segment, extract_span, sq_distance_to_segment,
        PathHit,
    };
    pub use crate::PlanarPoint;
    pub use nalgebra::Vector2;
}
