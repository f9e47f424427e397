//! Print the tooltip text a drawing tool would show for a small polygon,
//! in each unit system, plus whether closing it would self-intersect.
//!
//! Usage:
//!   cargo run -p drawgeom --example tooltip

use drawgeom::intersect::polygon_intersects_self;
use drawgeom::latlng::{path_length, GeoPoint};
use drawgeom::measure::{polygon_tooltip, MeasurementUnit};
use nalgebra::Vector2;

fn main() {
    let ring = [
        GeoPoint::new(51.5007, -0.1246),
        GeoPoint::new(51.5014, -0.1419),
        GeoPoint::new(51.5079, -0.1280),
    ];
    for (name, unit) in [
        ("metric", MeasurementUnit::metric()),
        ("imperial", MeasurementUnit::imperial()),
        ("imperial (feet)", MeasurementUnit::imperial_feet()),
    ] {
        let area = polygon_tooltip(&ring, unit).unwrap_or_default();
        let length = unit.format_distance(path_length(&ring));
        println!("{name}: area {area}, outline {length}");
    }

    // Crude equirectangular projection, enough for a local sanity check.
    let planar: Vec<Vector2<f64>> = ring
        .iter()
        .map(|p| Vector2::new(p.lng * p.lat.to_radians().cos(), -p.lat))
        .collect();
    println!("self-intersecting: {}", polygon_intersects_self(&planar));
}
