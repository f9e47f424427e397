//! Snapping a pointer location onto existing paths (split and erase tools).
//!
//! - `closest_point_on_segment` / `sq_distance_to_segment`: projection clamped
//!   to the segment, and its squared distance for comparison-only scans.
//! - `closest_point_on_path`: best segment over a whole path. The reported
//!   index is always the index of the later endpoint of that segment, which is
//!   where a split point gets inserted.
//! - `extract_span`: the sub-path between two snapped points.
//! - `vertices_within`: vertex hit test for the erase tool.

mod path;
mod segment;

pub use path::{
    closest_point_on_path, extract_span, vertices_within, PathHit, ERASE_SQ_RADIUS,
    SNAP_DISTANCE,
};
pub use segment::{
    closest_point_on_segment, project_onto_segment, sq_distance_to_segment, SegmentProjection,
};
