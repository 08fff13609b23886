//! Convex vertex rings: winding, normalization, containment, area.
//!
//! Purpose
//! - Turn caller-supplied vertex lists into the one canonical form the clip
//!   walk consumes: at least three vertices, no repeated consecutive vertices,
//!   convex, clockwise.
//! - Keep normalization pure by default (`normalize` returns a copy); the
//!   mutating form `normalize_in_place` is explicit.
//!
//! Conventions
//! - Turn signs go through `compare::sign`, so collinear vertices are neutral.
//! - A clockwise ring keeps its interior on the `Right` of every edge.
//!
//! Code cross-refs: `predicates::classify`, `clip::walk`.

use std::fmt;

use nalgebra::Vector2;

use super::predicates::{classify, cross};
use super::types::{EdgeClass, Winding};
use crate::compare::{points_equal, sign, Coord};

/// Why a vertex list is not an acceptable convex polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Fewer than three distinct vertices after removing repeats.
    TooFewVertices { len: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Turns of both signs, or a ring that winds more than once (star).
    Concave,
    /// Parallel coordinate arrays of different lengths.
    SizeMismatch { x_len: usize, y_len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::TooFewVertices { len } => {
                write!(f, "polygon has {len} distinct vertices (needs ≥3)")
            }
            ShapeError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            ShapeError::Concave => write!(f, "polygon is not convex"),
            ShapeError::SizeMismatch { x_len, y_len } => {
                write!(f, "x has {x_len} coordinates but y has {y_len}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Shoelace signed area; positive for counter-clockwise rings.
pub fn signed_area<T: Coord>(points: &[Vector2<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return nalgebra::zero();
    }
    let mut acc: T = nalgebra::zero();
    for i in 0..n {
        acc = acc + cross(points[i], points[(i + 1) % n]);
    }
    let two: T = nalgebra::one::<T>() + nalgebra::one();
    acc / two
}

/// Unsigned area of a simple ring.
pub fn area<T: Coord>(points: &[Vector2<T>]) -> T {
    let s = signed_area(points);
    if s < nalgebra::zero() {
        -s
    } else {
        s
    }
}

/// Winding of a ring from the signs of its turns, `None` if the turns mix
/// signs (concave) or the edge directions sweep more than one full turn
/// (self-intersecting star).
///
/// A ring whose turns are all neutral reports `Clockwise`.
pub fn winding<T: Coord>(points: &[Vector2<T>]) -> Option<Winding> {
    if x_direction_changes(points) > 2 {
        return None;
    }
    let n = points.len();
    let (mut left, mut right) = (false, false);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        match sign(cross(here - prev, next - here)) {
            std::cmp::Ordering::Greater => left = true,
            std::cmp::Ordering::Less => right = true,
            std::cmp::Ordering::Equal => {}
        }
        if left && right {
            return None;
        }
    }
    if left {
        Some(Winding::CounterClockwise)
    } else {
        Some(Winding::Clockwise)
    }
}

/// Sign changes of the edge-vector x-components around the ring, ignoring
/// vertical edges. A ring winding once changes at most twice.
fn x_direction_changes<T: Coord>(points: &[Vector2<T>]) -> usize {
    let n = points.len();
    let signs: Vec<std::cmp::Ordering> = (0..n)
        .map(|i| sign(points[(i + 1) % n].x - points[i].x))
        .filter(|s| !s.is_eq())
        .collect();
    let m = signs.len();
    (0..m).filter(|&i| signs[i] != signs[(i + m - 1) % m]).count()
}

/// Drop repeated consecutive vertices, including a closing copy of the first.
fn dedup_ring<T: Coord>(points: &mut Vec<Vector2<T>>) {
    points.dedup_by(|p, q| points_equal(*p, *q));
    while points.len() > 1 && points_equal(points[0], points[points.len() - 1]) {
        points.pop();
    }
}

/// Normalize `points` in place to a clockwise convex ring.
///
/// Returns the winding the input had. On error the vector may already have
/// lost repeated vertices but is otherwise untouched.
pub fn normalize_in_place<T: Coord>(
    points: &mut Vec<Vector2<T>>,
) -> Result<Winding, ShapeError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(ShapeError::NonFinite { index });
    }
    dedup_ring(points);
    if points.len() < 3 {
        return Err(ShapeError::TooFewVertices { len: points.len() });
    }
    let w = winding(points).ok_or(ShapeError::Concave)?;
    if w == Winding::CounterClockwise {
        points.reverse();
    }
    Ok(w)
}

/// Pure variant of [`normalize_in_place`]: returns a clockwise copy.
pub fn normalize<T: Coord>(points: &[Vector2<T>]) -> Result<Vec<Vector2<T>>, ShapeError> {
    let mut out = points.to_vec();
    normalize_in_place(&mut out)?;
    Ok(out)
}

/// Is `point` inside or on the boundary of the clockwise convex ring `polygon`?
pub fn contains<T: Coord>(point: Vector2<T>, polygon: &[Vector2<T>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| classify(point, polygon[i], polygon[(i + 1) % n]) != EdgeClass::Left)
}

/// A validated convex polygon in clockwise order.
///
/// Only constructible through validation, so every instance satisfies the
/// ring invariants the clip walk relies on.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon<T: Coord> {
    vertices: Vec<Vector2<T>>,
    input_winding: Winding,
}

impl<T: Coord> ConvexPolygon<T> {
    pub fn new(points: &[Vector2<T>]) -> Result<Self, ShapeError> {
        let mut vertices = points.to_vec();
        let input_winding = normalize_in_place(&mut vertices)?;
        Ok(Self {
            vertices,
            input_winding,
        })
    }

    /// Build from parallel coordinate arrays.
    pub fn from_xy(x: &[T], y: &[T]) -> Result<Self, ShapeError> {
        if x.len() != y.len() {
            return Err(ShapeError::SizeMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points: Vec<Vector2<T>> = x
            .iter()
            .zip(y.iter())
            .map(|(&px, &py)| Vector2::new(px, py))
            .collect();
        Self::new(&points)
    }

    /// Clockwise vertex ring.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a validated polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Winding of the caller's input before normalization.
    #[inline]
    pub fn input_winding(&self) -> Winding {
        self.input_winding
    }

    pub fn contains(&self, point: Vector2<T>) -> bool {
        contains(point, &self.vertices)
    }

    pub fn area(&self) -> T {
        area(&self.vertices)
    }
}
