//! Edge-walk intersection of two convex polygons.
//!
//! Purpose
//! - Compute `A ∩ B` for clockwise convex rings by advancing one edge cursor
//!   per polygon, emitting boundary crossings and the vertices of whichever
//!   polygon is currently inside.
//!
//! Model
//! - Searching: advance cursors until the first crossing, which becomes the
//!   start of the output ring.
//! - Tracing: keep walking and appending until the start crossing comes
//!   around again; the ring is then closed.
//! - Both phases share one budget of `iteration_factor × (|A| + |B|) + 1`
//!   iterations; the extra one re-detects the start crossing.
//! - Running out with an empty ring falls back to a containment test on the
//!   first vertices. A ring of fewer than three vertices is a boundary contact
//!   (`Overlap::Touching`); a longer partial ring is `Overlap::Unclosed`.
//!
//! References
//! - J. O'Rourke, C.-B. Chien, T. Olson, D. Naddor, "A new linear algorithm
//!   for intersecting convex polygons" (1982).
//! - M. J. Laszlo, "Computational Geometry and Computer Graphics in C++",
//!   §6.5 (classify/aims-at formulation).
//!
//! Code cross-refs: `geom2::predicates`, `clip::cursor`.

use nalgebra::Vector2;

use super::cursor::{advance, Cursor};
use super::types::{ClipCfg, ClipError, InFlag, Intersection, Operand, Overlap};
use crate::compare::{points_equal, Coord};
use crate::geom2::{aims_at, classify, contains, crossing, ConvexPolygon, EdgeClass, EdgeOrient};

/// Intersect two vertex rings with the default [`ClipCfg`].
///
/// Either winding is accepted; the result is clockwise.
pub fn intersect<T: Coord>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
) -> Result<Intersection<T>, ClipError> {
    intersect_with_cfg(a, b, &ClipCfg::default())
}

pub fn intersect_with_cfg<T: Coord>(
    a: &[Vector2<T>],
    b: &[Vector2<T>],
    cfg: &ClipCfg,
) -> Result<Intersection<T>, ClipError> {
    let pa = ConvexPolygon::new(a).map_err(|e| ClipError::from_shape(Operand::A, e))?;
    let pb = ConvexPolygon::new(b).map_err(|e| ClipError::from_shape(Operand::B, e))?;
    intersect_polygons(&pa, &pb, cfg)
}

/// Intersect two already validated polygons.
pub fn intersect_polygons<T: Coord>(
    a: &ConvexPolygon<T>,
    b: &ConvexPolygon<T>,
    cfg: &ClipCfg,
) -> Result<Intersection<T>, ClipError> {
    Walk::new(a.vertices(), b.vertices()).run(cfg)
}

#[derive(Clone, Copy, Debug)]
enum Phase<T: Coord> {
    Searching,
    Tracing { start: Vector2<T> },
}

/// Outcome of a single walk iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Progress {
    Continue,
    Closed,
}

struct Walk<'p, T: Coord> {
    a: &'p [Vector2<T>],
    b: &'p [Vector2<T>],
    ca: Cursor,
    cb: Cursor,
    inflag: InFlag,
    phase: Phase<T>,
    out: Vec<Vector2<T>>,
}

impl<'p, T: Coord> Walk<'p, T> {
    fn new(a: &'p [Vector2<T>], b: &'p [Vector2<T>]) -> Self {
        Self {
            a,
            b,
            ca: Cursor::new(a.len()),
            cb: Cursor::new(b.len()),
            inflag: InFlag::Unknown,
            phase: Phase::Searching,
            out: Vec::with_capacity(a.len() + b.len()),
        }
    }

    fn run(mut self, cfg: &ClipCfg) -> Result<Intersection<T>, ClipError> {
        let bound = cfg.budget(self.a.len(), self.b.len());
        let cap = cfg.max_iterations.unwrap_or(usize::MAX);
        tracing::debug!(
            a_len = self.a.len(),
            b_len = self.b.len(),
            budget = bound,
            cap = ?cfg.max_iterations,
            "convex intersection"
        );
        let limit = bound.min(cap);
        let mut iterations = 0usize;
        while iterations < limit {
            iterations += 1;
            if self.step(iterations) == Progress::Closed {
                let overlap = if self.out.len() < 3 {
                    Overlap::Touching
                } else {
                    Overlap::Crossing
                };
                tracing::debug!(iterations, vertices = self.out.len(), ?overlap, "ring closed");
                return Ok(Intersection {
                    vertices: self.out,
                    overlap,
                    iterations,
                });
            }
        }
        self.exhausted(cfg, iterations, iterations < bound)
    }

    fn step(&mut self, iteration: usize) -> Progress {
        let (a_org, a_dest) = (self.a[self.ca.org], self.a[self.ca.dest]);
        let (b_org, b_dest) = (self.b[self.cb.org], self.b[self.cb.dest]);
        let aclass = classify(a_dest, b_org, b_dest);
        let bclass = classify(b_dest, a_org, a_dest);
        let (cross_type, point) = crossing(a_org, a_dest, b_org, b_dest);
        tracing::trace!(
            iteration,
            a_edge = ?(self.ca.org, self.ca.dest),
            b_edge = ?(self.cb.org, self.cb.dest),
            ?aclass,
            ?bclass,
            ?cross_type,
            inflag = ?self.inflag,
            "walk"
        );

        match (cross_type, point) {
            (EdgeOrient::SkewCross, Some(p)) => {
                match self.phase {
                    Phase::Searching => {
                        self.out.push(p);
                        self.phase = Phase::Tracing { start: p };
                    }
                    // A crossing repeating the last vertex (a shared vertex seen
                    // from the next edge pair) is skipped, not taken as closure.
                    Phase::Tracing { start } => {
                        if self.out.last().map_or(true, |&q| !points_equal(p, q)) {
                            if points_equal(p, start) {
                                self.close_ring();
                                return Progress::Closed;
                            }
                            self.out.push(p);
                        }
                    }
                }
                self.inflag = if aclass == EdgeClass::Right {
                    InFlag::AIsInside
                } else if bclass == EdgeClass::Right {
                    InFlag::BIsInside
                } else {
                    InFlag::Unknown
                };
            }
            (EdgeOrient::Collinear, _)
                if aclass != EdgeClass::Behind && bclass != EdgeClass::Behind =>
            {
                self.inflag = InFlag::Unknown;
            }
            _ => {}
        }

        let a_aims = aims_at(a_org, a_dest, b_org, b_dest, aclass, cross_type);
        let b_aims = aims_at(b_org, b_dest, a_org, a_dest, bclass, cross_type);
        match (a_aims, b_aims) {
            (true, true) | (false, false) => {
                let outside_is_a = self.inflag == InFlag::BIsInside
                    || (self.inflag == InFlag::Unknown && aclass == EdgeClass::Left);
                if outside_is_a {
                    advance(self.a, &mut self.ca, false, &mut self.out);
                } else {
                    advance(self.b, &mut self.cb, false, &mut self.out);
                }
            }
            (true, false) => {
                let insert = self.inflag == InFlag::AIsInside;
                advance(self.a, &mut self.ca, insert, &mut self.out);
            }
            (false, true) => {
                let insert = self.inflag == InFlag::BIsInside;
                advance(self.b, &mut self.cb, insert, &mut self.out);
            }
        }
        Progress::Continue
    }

    /// Drop a trailing vertex that repeats the start of the ring.
    fn close_ring(&mut self) {
        if self.out.len() > 1 {
            if let (Some(&first), Some(&last)) = (self.out.first(), self.out.last()) {
                if points_equal(first, last) {
                    self.out.pop();
                }
            }
        }
    }

    fn exhausted(
        self,
        cfg: &ClipCfg,
        iterations: usize,
        truncated: bool,
    ) -> Result<Intersection<T>, ClipError> {
        if !truncated && (1..3).contains(&self.out.len()) {
            tracing::debug!(iterations, vertices = self.out.len(), "boundaries only touch");
            return Ok(Intersection {
                vertices: self.out,
                overlap: Overlap::Touching,
                iterations,
            });
        }
        if !self.out.is_empty() {
            tracing::warn!(
                iterations,
                vertices = self.out.len(),
                "intersection ring did not close within the iteration budget"
            );
            if cfg.require_closed_ring {
                return Err(ClipError::RingNotClosed {
                    iterations,
                    vertices: self.out.len(),
                });
            }
            return Ok(Intersection {
                vertices: self.out,
                overlap: Overlap::Unclosed,
                iterations,
            });
        }
        let (vertices, overlap) = if contains(self.a[0], self.b) {
            (self.a.to_vec(), Overlap::AInsideB)
        } else if contains(self.b[0], self.a) {
            (self.b.to_vec(), Overlap::BInsideA)
        } else {
            (Vec::new(), Overlap::Disjoint)
        };
        tracing::debug!(iterations, ?overlap, "no boundary crossings");
        Ok(Intersection {
            vertices,
            overlap,
            iterations,
        })
    }
}
