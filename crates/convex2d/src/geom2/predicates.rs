//! Point/edge and edge/edge predicates for the clip walk.
//!
//! Conventions
//! - Edges are directed `org → dest`. `Left` means positive signed area.
//! - Every sign test goes through `compare::sign`/`compare::compare`, so values
//!   within machine epsilon of a boundary count as on it.
//!
//! Code cross-refs: `types::{EdgeClass, EdgeOrient}`, `clip::walk`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::{EdgeClass, EdgeOrient};
use crate::compare::{compare, points_equal, sign, Coord};

/// 2D cross product `u × v` (z-component of the 3D cross product).
#[inline]
pub fn cross<T: Coord>(u: Vector2<T>, v: Vector2<T>) -> T {
    u.x * v.y - u.y * v.x
}

/// Classify `p` against the directed edge `org → dest`.
pub fn classify<T: Coord>(p: Vector2<T>, org: Vector2<T>, dest: Vector2<T>) -> EdgeClass {
    let a = dest - org;
    let b = p - org;
    match sign(cross(a, b)) {
        Ordering::Greater => return EdgeClass::Left,
        Ordering::Less => return EdgeClass::Right,
        Ordering::Equal => {}
    }
    // On the supporting line from here on.
    if sign(a.x * b.x).is_lt() || sign(a.y * b.y).is_lt() {
        return EdgeClass::Behind;
    }
    if compare(a.norm(), b.norm()).is_lt() {
        return EdgeClass::Beyond;
    }
    if points_equal(p, org) {
        EdgeClass::Origin
    } else if points_equal(p, dest) {
        EdgeClass::Destination
    } else {
        EdgeClass::Between
    }
}

/// Crossing relationship of segments `a_org → a_dest` and `b_org → b_dest`.
///
/// Parametric solve of `a_org + s·da = b_org + t·db`. A `SkewCross` carries
/// the crossing point; other orientations carry `None`.
///
/// Endpoint snapping: when `t` (or `s`) is within epsilon of 0 or 1 the exact
/// endpoint is returned, so a crossing at a vertex found from two different
/// edge pairs has bit-identical coordinates. Otherwise the point is evaluated
/// on the shorter edge, where the parameter error maps to the smaller offset.
pub fn crossing<T: Coord>(
    a_org: Vector2<T>,
    a_dest: Vector2<T>,
    b_org: Vector2<T>,
    b_dest: Vector2<T>,
) -> (EdgeOrient, Option<Vector2<T>>) {
    let da = a_dest - a_org;
    let db = b_dest - b_org;
    let den = cross(da, db);
    if sign(den).is_eq() {
        return match classify(a_org, b_org, b_dest) {
            EdgeClass::Left | EdgeClass::Right => (EdgeOrient::Parallel, None),
            EdgeClass::Behind
            | EdgeClass::Beyond
            | EdgeClass::Origin
            | EdgeClass::Destination
            | EdgeClass::Between => (EdgeOrient::Collinear, None),
        };
    }
    let w = b_org - a_org;
    let s = cross(w, db) / den;
    let t = cross(w, da) / den;
    if !(in_unit_interval(s) && in_unit_interval(t)) {
        return (EdgeOrient::SkewNoCross, None);
    }
    let zero = nalgebra::zero::<T>();
    let one = nalgebra::one::<T>();
    let point = if compare(t, zero).is_eq() {
        b_org
    } else if compare(t, one).is_eq() {
        b_dest
    } else if compare(s, zero).is_eq() {
        a_org
    } else if compare(s, one).is_eq() {
        a_dest
    } else if da.norm_squared() <= db.norm_squared() {
        a_org + da * s
    } else {
        b_org + db * t
    };
    (EdgeOrient::SkewCross, Some(point))
}

#[inline]
fn in_unit_interval<T: Coord>(u: T) -> bool {
    compare(u, nalgebra::zero()).is_ge() && compare(u, nalgebra::one()).is_le()
}

/// Does edge 1 aim at edge 2?
///
/// `class` is edge 1's destination classified against edge 2; `cross_type` is
/// the crossing relationship of the two edges.
pub fn aims_at<T: Coord>(
    org1: Vector2<T>,
    dest1: Vector2<T>,
    org2: Vector2<T>,
    dest2: Vector2<T>,
    class: EdgeClass,
    cross_type: EdgeOrient,
) -> bool {
    match cross_type {
        EdgeOrient::Collinear => class != EdgeClass::Beyond,
        EdgeOrient::SkewCross | EdgeOrient::SkewNoCross | EdgeOrient::Parallel => {
            let v1 = dest1 - org1;
            let v2 = dest2 - org2;
            if compare(v1.x * v2.y, v2.x * v1.y).is_ge() {
                class != EdgeClass::Right
            } else {
                class != EdgeClass::Left
            }
        }
    }
}
