use super::*;
use crate::latlng::{GeoPoint, DEG_TO_RAD, EARTH_RADIUS};
use proptest::prelude::*;

fn one_degree_square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(1.0, 0.0),
    ]
}

#[test]
fn area_of_one_degree_square_at_equator() {
    // Only the northern edge contributes its sin(lat) term: R² · d2r · sin(d2r).
    let expected = EARTH_RADIUS * EARTH_RADIUS * DEG_TO_RAD * DEG_TO_RAD.sin();
    let area = geodesic_area(&one_degree_square());
    assert!(((area - expected) / expected).abs() < 1e-12);
}

#[test]
fn area_degenerate_rings_are_zero() {
    assert_eq!(geodesic_area(&[]), 0.0);
    assert_eq!(geodesic_area(&[GeoPoint::new(10.0, 10.0)]), 0.0);
    assert_eq!(
        geodesic_area(&[GeoPoint::new(10.0, 10.0), GeoPoint::new(20.0, 30.0)]),
        0.0
    );
}

#[test]
fn area_ignores_winding() {
    let ring = one_degree_square();
    let mut rev = ring.clone();
    rev.reverse();
    let a = geodesic_area(&ring);
    let b = geodesic_area(&rev);
    assert!((a - b).abs() <= a * 1e-12);
}

#[test]
fn readable_area_metric() {
    assert_eq!(readable_area(10000.0, true), "1.00 ha");
    assert_eq!(readable_area(25_000.0, true), "2.50 ha");
    assert_eq!(readable_area(9999.99, true), "9999.99 m²");
    assert_eq!(readable_area(0.0, true), "0.00 m²");
}

#[test]
fn readable_area_imperial() {
    // 1e6 yd² sits between one acre and one square mile.
    assert_eq!(readable_area(836127.0, false), "206.61 acres");
    assert_eq!(readable_area(2_590_000.0, false), "1.00 mi²");
    // 100 m² = 119.6 yd², rounded up
    assert_eq!(readable_area(100.0, false), "120 yd²");
}

#[test]
fn readable_distance_metric() {
    assert_eq!(readable_distance(1000.0, true, true), "1000 m");
    assert_eq!(readable_distance(999.2, true, false), "1000 m");
    assert_eq!(readable_distance(1001.0, true, true), "1.00 km");
    assert_eq!(readable_distance(12.01, true, false), "13 m");
}

#[test]
fn readable_distance_imperial() {
    // 1609.34 m is 1759.99 yd: still below the mile threshold.
    assert_eq!(readable_distance(1609.34, false, false), "1760 yd");
    assert_eq!(readable_distance(1609.34, false, true), "5280 ft");
    assert_eq!(readable_distance(1610.0, false, false), "1.00 miles");
    assert_eq!(readable_distance(100.0, false, false), "110 yd");
    assert_eq!(readable_distance(100.0, false, true), "329 ft");
}

#[test]
fn two_decimal_ties_round_up() {
    assert_eq!(readable_distance(1125.0, true, false), "1.13 km");
    assert_eq!(readable_area(11250.0, true), "1.13 ha");
    assert_eq!(readable_area(0.125, true), "0.13 m²");
    assert_eq!(readable_area(0.375, true), "0.38 m²");
    // not a tie: nearest hundredth as usual
    assert_eq!(readable_distance(1124.9, true, false), "1.12 km");
    assert_eq!(readable_distance(1135.0, true, false), "1.14 km");
}

#[test]
fn small_negative_values_print_zero() {
    assert_eq!(readable_distance(-0.4, true, false), "0 m");
    assert_eq!(readable_distance(-0.1, false, true), "0 ft");
    assert_eq!(readable_area(-0.2, false), "0 yd²");
}

#[test]
fn unit_delegates() {
    let unit = MeasurementUnit::imperial_feet();
    assert_eq!(unit.format_distance(100.0), readable_distance(100.0, false, true));
    assert_eq!(unit.format_area(100.0), readable_area(100.0, false));
    assert_eq!(MeasurementUnit::default(), MeasurementUnit::metric());
}

#[test]
fn tooltip_needs_three_points() {
    let ring = one_degree_square();
    assert_eq!(polygon_tooltip(&ring[..2], MeasurementUnit::metric()), None);
    let text = polygon_tooltip(&ring, MeasurementUnit::metric()).unwrap();
    assert!(text.ends_with(" ha"));
}

fn arb_ring() -> impl Strategy<Value = Vec<GeoPoint>> {
    prop::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 0..12)
        .prop_map(|v| v.into_iter().map(GeoPoint::from).collect())
}

proptest! {
    #[test]
    fn area_is_non_negative(ring in arb_ring()) {
        prop_assert!(geodesic_area(&ring) >= 0.0);
    }

    #[test]
    fn area_is_deterministic(ring in arb_ring()) {
        prop_assert_eq!(geodesic_area(&ring).to_bits(), geodesic_area(&ring).to_bits());
    }

    #[test]
    fn readable_text_is_deterministic(value in 0.0f64..1e8, metric: bool, feet: bool) {
        prop_assert_eq!(readable_area(value, metric), readable_area(value, metric));
        prop_assert_eq!(
            readable_distance(value, metric, feet),
            readable_distance(value, metric, feet)
        );
    }
}
