//! Convex polygon clipping.
//!
//! Purpose
//! - Intersect two convex polygons given as vertex rings or as parallel
//!   coordinate arrays, reporting how the result relates to the operands.
//!
//! Code cross-refs: `walk` (algorithm), `geom2::ConvexPolygon` (validation).

mod cursor;
mod types;
mod walk;
mod xy;

pub use types::{ClipCfg, ClipError, InFlag, Intersection, Operand, Overlap};
pub use walk::{intersect, intersect_polygons, intersect_with_cfg};
pub use xy::{intersect_xy, intersect_xy_with_cfg};
