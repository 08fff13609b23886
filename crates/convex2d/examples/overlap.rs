//! Intersect a few random convex polygon pairs and print the results as JSON.
//!
//! Usage:
//!   cargo run -p convex2d --example overlap -- [seed] [pairs]
//!   RUST_LOG=convex2d=trace cargo run -p convex2d --example overlap
//!
//! Each line is one pair: operand rings, result ring, overlap kind, area and
//! walk iterations.

use anyhow::{Context, Result};
use convex2d::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("seed {s:?} is not a u64"))?,
        None => 2025,
    };
    let pairs: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("pair count {s:?} is not a u64"))?,
        None => 4,
    };
    tracing::info!(seed, pairs, version = convex2d::VERSION, "overlap demo");

    let cfg = ConvexCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 8 },
        ..ConvexCfg::default()
    };
    for i in 0..pairs {
        let a = draw_convex_polygon(cfg, ReplayToken::new(seed, 2 * i))
            .context("sampler produced a degenerate polygon")?;
        let b = draw_convex_polygon(cfg, ReplayToken::new(seed, 2 * i + 1))
            .context("sampler produced a degenerate polygon")?;
        let hit = intersect(&a, &b)?;
        let ring =
            |pts: &[Vec2<f64>]| -> Vec<[f64; 2]> { pts.iter().map(|p| [p.x, p.y]).collect() };
        let row = serde_json::json!({
            "pair": i,
            "a": ring(&a),
            "b": ring(&b),
            "c": ring(&hit.vertices),
            "overlap": format!("{:?}", hit.overlap),
            "area": hit.area(),
            "iterations": hit.iterations,
        });
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}
