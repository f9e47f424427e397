//! Criterion microbenches for tooltip measurement (area + formatting).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use drawgeom::latlng::{path_length, GeoPoint};
use drawgeom::measure::{geodesic_area, MeasurementUnit};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_ring(n: usize, seed: u64) -> Vec<GeoPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| GeoPoint::new(rng.gen_range(40.0..41.0), rng.gen_range(-74.5..-73.5)))
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for &n in &[3usize, 32, 512] {
        let ring = random_ring(n, 7);
        group.bench_with_input(BenchmarkId::new("geodesic_area", n), &ring, |b, r| {
            b.iter(|| geodesic_area(r))
        });
        group.bench_with_input(BenchmarkId::new("path_length", n), &ring, |b, r| {
            b.iter(|| path_length(r))
        });
    }
    let unit = MeasurementUnit::imperial_feet();
    group.bench_function("format_distance", |b| b.iter(|| unit.format_distance(1234.5)));
    group.finish();
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
