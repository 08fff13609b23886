//! Random convex polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of convex vertex rings for the
//!   clip property tests and benchmarks. Draws are parameterizable and
//!   reproducible from a `(seed, index)` token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, then shift by a random offset.
//! - Output winding is clockwise, or a coin flip when `random_winding` is set,
//!   so callers exercise the normalizer.
//!
//! Code cross-refs: `util::convex_hull`, `polygon::normalize`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of points fed to the hull (the ring may come out shorter).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    /// Inclusive range, never below a triangle.
    fn range(self) -> std::ops::RangeInclusive<usize> {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        lo..=hi.max(lo)
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ConvexCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Center offset drawn uniformly from `[-center_spread, center_spread]²`.
    pub center_spread: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Flip a coin for the output winding (otherwise clockwise).
    pub random_winding: bool,
}
impl Default for ConvexCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center_spread: 1.0,
            random_phase: true,
            random_winding: true,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// One independent stream per `(seed, index)`: both words go straight
    /// into the 256-bit generator seed.
    fn rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }
}

/// Draw a random convex vertex ring.
///
/// Returns `None` only when the hull collapses below three vertices, which
/// needs a degenerate configuration (e.g. zero radius).
pub fn draw_convex_polygon(cfg: ConvexCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    let mut rng = tok.rng();
    let n = rng.gen_range(cfg.vertex_count.range());
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(0.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let spread = cfg.center_spread.max(0.0);
    let center = Vector2::new(
        (rng.gen::<f64>() * 2.0 - 1.0) * spread,
        (rng.gen::<f64>() * 2.0 - 1.0) * spread,
    );
    let pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let mut ring = super::util::convex_hull(&pts)?;
    // Hull is counter-clockwise.
    if !(cfg.random_winding && rng.gen::<bool>()) {
        ring.reverse();
    }
    Some(ring)
}
