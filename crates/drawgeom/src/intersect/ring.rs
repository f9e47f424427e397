use crate::PlanarPoint;

use super::segment::segments_intersect;

/// Rings of this many points or fewer have at most two segments.
const MIN_POINTS_EXCLUSIVE: usize = 3;

#[inline]
fn too_few_points(len: usize) -> bool {
    len <= MIN_POINTS_EXCLUSIVE
}

/// Test segment `(p, p1)` against ring segments `(ring[j-1], ring[j])` for
/// `j = max_index, max_index-1, ..., min_index+1`.
///
/// `max_index` is clamped to the last point of the ring.
pub fn segments_range_intersect(
    ring: &[PlanarPoint],
    p: PlanarPoint,
    p1: PlanarPoint,
    max_index: usize,
    min_index: usize,
) -> bool {
    if ring.is_empty() {
        return false;
    }
    let max_index = max_index.min(ring.len() - 1);
    for j in (min_index.saturating_add(1)..=max_index).rev() {
        if segments_intersect(p, p1, ring[j - 1], ring[j]) {
            tracing::trace!(segment = j, "crossing found");
            return true;
        }
    }
    false
}

/// Whether any two non-adjacent segments of the open path cross.
///
/// Walks backwards from the last segment; the first crossing wins.
pub fn polyline_intersects_self(ring: &[PlanarPoint]) -> bool {
    let len = ring.len();
    if too_few_points(len) {
        return false;
    }
    (3..len)
        .rev()
        .any(|i| segments_range_intersect(ring, ring[i - 1], ring[i], i - 2, 0))
}

/// Whether appending `candidate` would make the new last segment cross an
/// earlier, non-adjacent one.
///
/// With `skip_first_segment` the first segment is excluded too (closing a
/// polygon, where the candidate meets the first segment by construction).
pub fn would_intersect(
    ring: &[PlanarPoint],
    candidate: PlanarPoint,
    skip_first_segment: bool,
) -> bool {
    let len = ring.len();
    if too_few_points(len + 1) {
        return false;
    }
    let min_index = usize::from(skip_first_segment);
    segments_range_intersect(ring, ring[len - 1], candidate, len - 2, min_index)
}

/// Polyline check plus the closing segment `(last, first)` against every
/// segment except the first. Holes are not considered.
pub fn polygon_intersects_self(ring: &[PlanarPoint]) -> bool {
    let len = ring.len();
    if too_few_points(len) {
        return false;
    }
    if polyline_intersects_self(ring) {
        return true;
    }
    segments_range_intersect(ring, ring[len - 1], ring[0], len - 2, 1)
}
