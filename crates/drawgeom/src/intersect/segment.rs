use crate::PlanarPoint;

/// Orientation flag: `true` when `a → b → c` turns counterclockwise
/// (y axis up; clockwise on screen where y grows downward).
#[inline]
pub fn ccw(a: PlanarPoint, b: PlanarPoint, c: PlanarPoint) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Whether segment `(p, p1)` properly crosses segment `(p2, p3)`.
///
/// Sign comparison only; degenerate cases are not handled.
#[inline]
pub fn segments_intersect(
    p: PlanarPoint,
    p1: PlanarPoint,
    p2: PlanarPoint,
    p3: PlanarPoint,
) -> bool {
    ccw(p, p2, p3) != ccw(p1, p2, p3) && ccw(p, p1, p2) != ccw(p, p1, p3)
}
