//! Self-intersection checks for polylines and polygons (planar points).
//!
//! Purpose
//! - Reject invalid shapes while the user draws: every new vertex or drag
//!   triggers one of these predicates.
//!
//! Assumptions and conventions
//! - Points are already projected to the plane (pixels or layer units);
//!   no projection happens here.
//! - A ring is an open sequence; polygons are closed implicitly from the last
//!   point back to the first.
//! - Adjacent segments are never tested against each other: they share an
//!   endpoint, which is not a crossing.
//! - Degenerate configurations (collinear, overlapping, touching at an
//!   endpoint) give unspecified answers. They never panic.
//! - Fewer than three segments cannot self-intersect without collinearity, so
//!   rings of 3 points or fewer short-circuit to `false`.

mod ring;
mod segment;

pub use ring::{
    polygon_intersects_self, polyline_intersects_self, segments_range_intersect,
    would_intersect,
};
pub use segment::{ccw, segments_intersect};
