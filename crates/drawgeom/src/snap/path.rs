use crate::error::{GeomError, Result};
use crate::PlanarPoint;

use super::segment::project;

/// Split hits farther than this (pixels) from the path are ignored.
pub const SNAP_DISTANCE: f64 = 20.0;
/// Erase tool radius, squared pixels.
pub const ERASE_SQ_RADIUS: f64 = 40.0;

/// Nearest location on a path.
///
/// Invariants:
/// - `index` is the later endpoint of the matching segment, so `1 <= index < len`.
/// - `distance` is the Euclidean (not squared) distance to `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathHit {
    pub index: usize,
    pub point: PlanarPoint,
    pub distance: f64,
}

impl PathHit {
    #[inline]
    pub fn within(&self, tolerance: f64) -> bool {
        self.distance < tolerance
    }
}

/// Scan every segment of `path` for the point closest to `p`.
///
/// Ties keep the earliest segment. Needs at least two points, all finite.
pub fn closest_point_on_path(p: PlanarPoint, path: &[PlanarPoint]) -> Result<PathHit> {
    if path.len() < 2 {
        return Err(GeomError::TooFewPoints {
            required: 2,
            actual: path.len(),
        });
    }
    let finite = |v: &PlanarPoint| v.x.is_finite() && v.y.is_finite();
    if !finite(&p) || !path.iter().all(finite) {
        return Err(GeomError::NonFinite);
    }
    let (mut point, mut sq) = project(p, path[0], path[1]);
    let mut index = 1;
    for i in 2..path.len() {
        let (q, d) = project(p, path[i - 1], path[i]);
        if d < sq {
            (index, point, sq) = (i, q, d);
        }
    }
    tracing::debug!(index, sq, "closest_point_on_path");
    Ok(PathHit {
        index,
        point,
        distance: sq.sqrt(),
    })
}

/// Sub-path between two snapped locations on the same path.
///
/// Each location is `(index, point)` as in `PathHit`. The pair is ordered by
/// index, so the result always runs along the path direction:
/// `[first.point, path[first.index..last.index].., last.point]`.
pub fn extract_span<T: Copy>(path: &[T], a: (usize, T), b: (usize, T)) -> Result<Vec<T>> {
    let len = path.len();
    for index in [a.0, b.0] {
        if index == 0 || index >= len {
            return Err(GeomError::IndexOutOfRange { index, len });
        }
    }
    let (first, last) = if a.0 > b.0 { (b, a) } else { (a, b) };
    let mut out = Vec::with_capacity(last.0 - first.0 + 2);
    out.push(first.1);
    out.extend_from_slice(&path[first.0..last.0]);
    out.push(last.1);
    Ok(out)
}

/// Indices of vertices whose squared distance to `p` is below `sq_radius`.
pub fn vertices_within(path: &[PlanarPoint], p: PlanarPoint, sq_radius: f64) -> Vec<usize> {
    path.iter()
        .enumerate()
        .filter(|(_, v)| (*v - p).norm_squared() < sq_radius)
        .map(|(i, _)| i)
        .collect()
}
