use std::cmp::Ordering;

use nalgebra::Vector2;

use super::predicates::cross;
use crate::compare::{points_equal, sign, Coord};

/// Convex hull of a point cloud by monotone chain, counter-clockwise.
///
/// Points that do not turn strictly left under `compare::sign` are dropped,
/// so the hull has no collinear vertices. `None` if fewer than three remain.
pub fn convex_hull<T: Coord>(points: &[Vector2<T>]) -> Option<Vec<Vector2<T>>> {
    let mut pts = points.to_vec();
    pts.sort_by(|p, q| {
        let by_x = p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal);
        by_x.then_with(|| p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal))
    });
    pts.dedup_by(|p, q| points_equal(*p, *q));
    if pts.len() < 3 {
        return None;
    }
    let lower = half_hull(pts.iter().copied());
    let upper = half_hull(pts.iter().rev().copied());
    let mut hull = Vec::with_capacity(lower.len() + upper.len());
    // Each chain ends where the other starts.
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull.extend_from_slice(&upper[..upper.len() - 1]);
    (hull.len() >= 3).then_some(hull)
}

fn half_hull<T: Coord>(sorted: impl Iterator<Item = Vector2<T>>) -> Vec<Vector2<T>> {
    let mut chain: Vec<Vector2<T>> = Vec::new();
    for p in sorted {
        while let [.., o, a] = chain[..] {
            if sign(cross(a - o, p - o)) == Ordering::Greater {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
