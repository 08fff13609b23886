//! 2D geometry for convex vertex rings.
//!
//! Purpose
//! - Classify points against directed edges, detect edge crossings, and hold
//!   the validated clockwise `ConvexPolygon` the clip walk operates on.
//! - Stay generic over coordinate precision (`Coord`: `f32` or `f64`); the
//!   random sampler is `f64` only.
//!
//! Code cross-refs: `compare`, `clip::walk`.

pub mod polygon;
pub mod predicates;
pub mod rand;
mod types;
mod util;

pub use polygon::{
    area, contains, normalize, normalize_in_place, signed_area, winding, ConvexPolygon,
    ShapeError,
};
pub use predicates::{aims_at, classify, cross, crossing};
pub use types::{EdgeClass, EdgeOrient, Winding};
pub use util::convex_hull;
