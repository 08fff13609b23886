//! Criterion benchmarks for the convex intersection walk.
//! Focus sizes: vertices per operand n in {4, 16, 64, 256}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p convex2d

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use convex2d::geom2::rand::{draw_convex_polygon, ConvexCfg, ReplayToken, VertexCount};
use convex2d::{intersect, intersect_xy, Vec2};

fn random_pair(n: usize, seed: u64) -> (Vec<Vec2<f64>>, Vec<Vec2<f64>>) {
    let cfg = ConvexCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.2,
        radial_jitter: 0.0,
        center_spread: 0.5,
        ..ConvexCfg::default()
    };
    let draw = |index| draw_convex_polygon(cfg, ReplayToken::new(seed, index)).unwrap_or_default();
    (draw(0), draw(1))
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("points", n), &n, |b, &n| {
            b.iter_batched(
                || random_pair(n, 43),
                |(pa, pb)| {
                    let _res = intersect(&pa, &pb);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("xy", n), &n, |b, &n| {
            let (pa, pb) = random_pair(n, 44);
            let split = |p: &[Vec2<f64>]| -> (Vec<f64>, Vec<f64>) {
                (p.iter().map(|v| v.x).collect(), p.iter().map(|v| v.y).collect())
            };
            let ((ax, ay), (bx, by)) = (split(&pa), split(&pb));
            let (mut cx, mut cy) = (Vec::new(), Vec::new());
            b.iter(|| {
                let _res = intersect_xy(&ax, &ay, &bx, &by, &mut cx, &mut cy);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
