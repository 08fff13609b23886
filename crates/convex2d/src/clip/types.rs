use std::fmt;

use nalgebra::Vector2;

use crate::compare::Coord;
use crate::geom2::{polygon, ShapeError};

/// Walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClipCfg {
    /// Walk budget as a multiple of `|A| + |B|`.
    pub iteration_factor: usize,
    /// Hard cap on the total number of iterations across both phases.
    pub max_iterations: Option<usize>,
    /// Report an unclosed ring as `ClipError::RingNotClosed` instead of
    /// returning it flagged `Overlap::Unclosed`.
    pub require_closed_ring: bool,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self {
            iteration_factor: 2,
            max_iterations: None,
            require_closed_ring: false,
        }
    }
}

impl ClipCfg {
    /// Iteration budget for operands of `n` and `m` vertices: the walk bound
    /// plus the one iteration that meets the start crossing again.
    #[inline]
    pub fn budget(&self, n: usize, m: usize) -> usize {
        self.iteration_factor
            .max(1)
            .saturating_mul(n + m)
            .saturating_add(1)
    }
}

/// Which polygon's boundary is currently on the inside of the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InFlag {
    AIsInside,
    BIsInside,
    Unknown,
}

/// How the result ring relates to the operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// Closed ring assembled from boundary crossings.
    Crossing,
    /// No crossings; A lies inside B and is the result.
    AInsideB,
    /// No crossings; B lies inside A and is the result.
    BInsideA,
    /// No crossings and no containment; empty result.
    Disjoint,
    /// Boundaries meet at a point or along a segment only; the result has
    /// fewer than three vertices and no area.
    Touching,
    /// Crossings were found but the ring did not close within the budget.
    Unclosed,
}

impl Overlap {
    #[inline]
    pub fn is_disjoint(self) -> bool {
        self == Overlap::Disjoint
    }
}

/// Result of one intersection call.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection<T: Coord> {
    /// Clockwise ring, empty when disjoint.
    pub vertices: Vec<Vector2<T>>,
    pub overlap: Overlap,
    /// Walk iterations spent, both phases.
    pub iterations: usize,
}

impl<T: Coord> Intersection<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn area(&self) -> T {
        polygon::area(&self.vertices)
    }
}

/// Operand position in a two-polygon call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => write!(f, "polygon A"),
            Operand::B => write!(f, "polygon B"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipError {
    SizeMismatch {
        operand: Operand,
        x_len: usize,
        y_len: usize,
    },
    TooFewVertices {
        operand: Operand,
        len: usize,
    },
    NonFiniteCoordinate {
        operand: Operand,
        index: usize,
    },
    ConcavePolygon {
        operand: Operand,
    },
    /// Only raised with `ClipCfg::require_closed_ring`.
    RingNotClosed {
        iterations: usize,
        vertices: usize,
    },
}

impl ClipError {
    pub(crate) fn from_shape(operand: Operand, err: ShapeError) -> Self {
        match err {
            ShapeError::TooFewVertices { len } => Self::TooFewVertices { operand, len },
            ShapeError::NonFinite { index } => Self::NonFiniteCoordinate { operand, index },
            ShapeError::Concave => Self::ConcavePolygon { operand },
            ShapeError::SizeMismatch { x_len, y_len } => Self::SizeMismatch {
                operand,
                x_len,
                y_len,
            },
        }
    }
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::SizeMismatch {
                operand,
                x_len,
                y_len,
            } => write!(f, "{operand}: x has {x_len} coordinates but y has {y_len}"),
            ClipError::TooFewVertices { operand, len } => {
                write!(f, "{operand}: {len} distinct vertices (needs ≥3)")
            }
            ClipError::NonFiniteCoordinate { operand, index } => {
                write!(f, "{operand}: vertex {index} has a non-finite coordinate")
            }
            ClipError::ConcavePolygon { operand } => write!(f, "{operand} is not convex"),
            ClipError::RingNotClosed {
                iterations,
                vertices,
            } => write!(
                f,
                "intersection ring not closed after {iterations} iterations \
                 ({vertices} vertices collected)"
            ),
        }
    }
}

impl std::error::Error for ClipError {}
