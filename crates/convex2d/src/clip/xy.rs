//! Parallel coordinate-array entry point.
//!
//! For callers that keep polygons as separate `x`/`y` arrays. The output
//! arrays are cleared first and stay empty on any error.

use super::types::{ClipCfg, ClipError, Operand, Overlap};
use super::walk::intersect_polygons;
use crate::compare::Coord;
use crate::geom2::ConvexPolygon;

/// Intersect `(ax, ay)` with `(bx, by)` into `(cx, cy)` with the default [`ClipCfg`].
pub fn intersect_xy<T: Coord>(
    ax: &[T],
    ay: &[T],
    bx: &[T],
    by: &[T],
    cx: &mut Vec<T>,
    cy: &mut Vec<T>,
) -> Result<Overlap, ClipError> {
    intersect_xy_with_cfg(ax, ay, bx, by, cx, cy, &ClipCfg::default())
}

#[allow(clippy::too_many_arguments)]
pub fn intersect_xy_with_cfg<T: Coord>(
    ax: &[T],
    ay: &[T],
    bx: &[T],
    by: &[T],
    cx: &mut Vec<T>,
    cy: &mut Vec<T>,
    cfg: &ClipCfg,
) -> Result<Overlap, ClipError> {
    cx.clear();
    cy.clear();
    let a = ConvexPolygon::from_xy(ax, ay).map_err(|e| ClipError::from_shape(Operand::A, e))?;
    let b = ConvexPolygon::from_xy(bx, by).map_err(|e| ClipError::from_shape(Operand::B, e))?;
    let hit = intersect_polygons(&a, &b, cfg)?;
    cx.extend(hit.vertices.iter().map(|p| p.x));
    cy.extend(hit.vertices.iter().map(|p| p.y));
    Ok(hit.overlap)
}
