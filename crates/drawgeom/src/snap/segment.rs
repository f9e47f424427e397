use crate::PlanarPoint;

/// Result of `project_onto_segment`, selected by its `only_distance` flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentProjection {
    Point(PlanarPoint),
    SqDistance(f64),
}

/// Closest point of segment `(p1, p2)` to `p` and the squared distance to it.
/// A zero-length segment projects onto `p1`.
#[inline]
pub(super) fn project(p: PlanarPoint, p1: PlanarPoint, p2: PlanarPoint) -> (PlanarPoint, f64) {
    let d = p2 - p1;
    let dot = d.norm_squared();
    let mut q = p1;
    if dot > 0.0 {
        let t = (p - p1).dot(&d) / dot;
        if t > 1.0 {
            q = p2;
        } else if t > 0.0 {
            q = p1 + d * t;
        }
    }
    (q, (p - q).norm_squared())
}

/// Point on segment `(p1, p2)` closest to `p`.
#[inline]
pub fn closest_point_on_segment(p: PlanarPoint, p1: PlanarPoint, p2: PlanarPoint) -> PlanarPoint {
    project(p, p1, p2).0
}

/// Squared distance from `p` to segment `(p1, p2)`; no square root.
#[inline]
pub fn sq_distance_to_segment(p: PlanarPoint, p1: PlanarPoint, p2: PlanarPoint) -> f64 {
    project(p, p1, p2).1
}

/// Single-call form: the squared distance when `only_distance`, else the point.
pub fn project_onto_segment(
    p: PlanarPoint,
    p1: PlanarPoint,
    p2: PlanarPoint,
    only_distance: bool,
) -> SegmentProjection {
    let (q, sq) = project(p, p1, p2);
    if only_distance {
        SegmentProjection::SqDistance(sq)
    } else {
        SegmentProjection::Point(q)
    }
}
