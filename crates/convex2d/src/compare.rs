//! Tolerance-based scalar comparison.
//!
//! Purpose
//! - Route every geometric predicate through a single three-way comparison so
//!   that floating-point noise below machine epsilon never flips a decision.
//! - Stay generic over the coordinate precision (`f32` or `f64`); the epsilon
//!   is the one of the operand type.
//!
//! Code cross-refs: `geom2::predicates`, `geom2::polygon`, `clip::walk`.

use std::cmp::Ordering;

use nalgebra::{RealField, Vector2};

/// Scalar usable as a polygon coordinate.
///
/// Blanket-implemented for every copyable nalgebra real; in practice `f32`
/// and `f64`. One call never mixes precisions.
pub trait Coord: RealField + Copy {}

impl<T: RealField + Copy> Coord for T {}

/// Machine epsilon of `T` (`f32::EPSILON` / `f64::EPSILON`).
#[inline]
pub fn epsilon<T: Coord>() -> T {
    T::default_epsilon()
}

/// Three-way comparison with an absolute machine-epsilon tolerance.
///
/// Returns `Equal` unless `|a - b|` exceeds the epsilon, otherwise the sign of
/// `a - b`. A NaN difference compares `Equal`.
#[inline]
pub fn compare<T: Coord>(a: T, b: T) -> Ordering {
    let eps = epsilon::<T>();
    let diff = a - b;
    if diff > eps {
        Ordering::Greater
    } else if diff < -eps {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Sign of `a` with the same tolerance as [`compare`].
#[inline]
pub fn sign<T: Coord>(a: T) -> Ordering {
    compare(a, nalgebra::zero())
}

/// Component-wise equality of two points under [`compare`].
#[inline]
pub fn points_equal<T: Coord>(p: Vector2<T>, q: Vector2<T>) -> bool {
    compare(p.x, q.x).is_eq() && compare(p.y, q.y).is_eq()
}

/// First index where two sequences disagree under [`compare`].
///
/// Sequences of different length disagree at the shorter length. Used by the
/// array utilities that consume polygon output and by tests.
pub fn first_mismatch<T: Coord>(value: &[T], expected: &[T]) -> Option<usize> {
    for (i, (&v, &e)) in value.iter().zip(expected.iter()).enumerate() {
        if !compare(v, e).is_eq() {
            tracing::debug!(
                index = i,
                value = %v,
                expected = %e,
                diff = %(v - e),
                "sequence mismatch"
            );
            return Some(i);
        }
    }
    if value.len() != expected.len() {
        tracing::debug!(value_len = value.len(), expected_len = expected.len(), "length mismatch");
        return Some(value.len().min(expected.len()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_within_epsilon_is_equal() {
        assert_eq!(compare(1.0_f64, 1.0 + f64::EPSILON / 2.0), Ordering::Equal);
        assert_eq!(compare(1.0_f64, 1.0 + 4.0 * f64::EPSILON), Ordering::Less);
        assert_eq!(compare(2.0_f64, 1.0), Ordering::Greater);
        // f32 epsilon is much coarser
        assert_eq!(compare(1.0_f32, 1.0 + 1e-8), Ordering::Equal);
        assert_eq!(compare(1.0_f32, 1.001), Ordering::Less);
    }

    #[test]
    fn nan_compares_equal() {
        assert_eq!(compare(f64::NAN, 1.0), Ordering::Equal);
    }

    #[test]
    fn sign_and_points() {
        assert_eq!(sign(-1e-3_f64), Ordering::Less);
        assert_eq!(sign(1e-20_f64), Ordering::Equal);
        assert!(points_equal(Vector2::new(0.5, 0.25), Vector2::new(0.5, 0.25 + 1e-17)));
        assert!(!points_equal(Vector2::new(0.5, 0.25), Vector2::new(0.5, 0.26)));
    }

    #[test]
    fn mismatch_index() {
        let a = [1.0_f64, 2.0, 3.0];
        assert_eq!(first_mismatch(&a, &[1.0, 2.0, 3.0]), None);
        assert_eq!(first_mismatch(&a, &[1.0, 2.5, 3.0]), Some(1));
        assert_eq!(first_mismatch(&a, &[1.0, 2.0]), Some(2));
    }
}
