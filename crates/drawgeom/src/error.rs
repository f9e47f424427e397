//! Invalid-argument errors.
//!
//! Only operations with real preconditions return these. Predicates such as
//! `polyline_intersects_self` answer `false` for short rings instead, and
//! degenerate geometry (collinear or touching segments) is never an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("need at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("index {index} out of range for path of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("non-finite coordinate in input")]
    NonFinite,
}

pub type Result<T> = std::result::Result<T, GeomError>;
