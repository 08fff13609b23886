//! Intersection of convex polygons in the plane.
//!
//! Purpose
//! - Compute `A ∩ B` for two convex polygons with an O(n + m) edge walk,
//!   including the containment and disjoint cases.
//! - Work in `f32` or `f64` (one precision per call) with machine-epsilon
//!   tolerant predicates.
//!
//! Layout
//! - `compare`: tolerance-based scalar comparison.
//! - `geom2`: edge predicates, polygon normalization, random convex sampler.
//! - `clip`: the walk and its entry points.
//!
//! Logging
//! - Events go through `tracing` (debug on entry/outcome, trace per walk
//!   iteration, warn on an unclosed ring). Installing a subscriber is up to
//!   the caller.

pub mod clip;
pub mod compare;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use clip::{
    intersect, intersect_polygons, intersect_with_cfg, intersect_xy, ClipCfg, ClipError,
    Intersection, Overlap,
};
pub use geom2::{ConvexPolygon, ShapeError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{
        intersect, intersect_polygons, intersect_with_cfg, intersect_xy, intersect_xy_with_cfg,
        ClipCfg, ClipError, Intersection, Operand, Overlap,
    };
    pub use crate::compare::{compare, Coord};
    pub use crate::geom2::rand::{draw_convex_polygon, ConvexCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{ConvexPolygon, EdgeClass, EdgeOrient, ShapeError, Winding};
    pub use nalgebra::Vector2 as Vec2;
}
