//! Geodesic measurement and tooltip formatting.
//!
//! Purpose
//! - Area of a closed ring of geographic points (spherical-excess
//!   approximation) and human-readable area/distance strings.
//!
//! Conventions
//! - Inputs are meters / square meters; outputs are display strings.
//! - Small units (m, yd, ft, yd²) round up to whole numbers; large units
//!   (km, miles, ha, acres, mi²) use exactly two decimals. Tooltip text
//!   depends on this split, so it stays as is.
//! - Unit choice is an explicit `MeasurementUnit` value, never shared state.

mod area;
mod format;

pub use area::{geodesic_area, polygon_tooltip};
pub use format::{readable_area, readable_distance, MeasurementUnit};

#[cfg(test)]
mod tests;
