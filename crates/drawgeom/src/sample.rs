//! Random simple rings in the plane (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, non-self-intersecting fixtures for property tests and
//!   benches of the intersection engine.
//!
//! Model
//! - `n` equally spaced angles around `center`, each jittered by less than half
//!   the spacing, then sorted. Radii are jittered but kept positive. A ring
//!   whose vertices have strictly increasing angles around an interior point is
//!   star-shaped, hence simple.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::PlanarPoint;

/// Star ring sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    /// Clamped to at least 3.
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Radii are `radius * (1 + u)` with `u∈[-radial_jitter, radial_jitter]`, clamped to [0, 0.9].
    pub radial_jitter: f64,
    pub radius: f64,
    pub center: PlanarPoint,
}

impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 100.0,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a simple, counterclockwise star-shaped ring (open: first point not repeated).
pub fn draw_star_ring(cfg: RingCfg, tok: ReplayToken) -> Vec<PlanarPoint> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.radius.abs().max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Figure-eight fixture: `(0,0), (s,s), (s,0), (0,s)`; segments 0-1 and 2-3 cross.
pub fn bowtie(size: f64) -> Vec<PlanarPoint> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(size, size),
        Vector2::new(size, 0.0),
        Vector2::new(0.0, size),
    ]
}
