use nalgebra::Vector2;

use crate::compare::{points_equal, Coord};

/// Directed edge `org → dest` of one polygon, as vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub org: usize,
    pub dest: usize,
    len: usize,
}

impl Cursor {
    /// Edge starting at vertex 0 of a ring with `len ≥ 1` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            org: 0,
            dest: 1 % len.max(1),
            len: len.max(1),
        }
    }

    #[inline]
    pub fn step(&mut self) {
        self.org = self.dest;
        self.dest = (self.dest + 1) % self.len;
    }
}

/// Move `cursor` one edge forward; if `insert`, first append the current
/// destination to `out` unless it repeats the last output vertex.
pub(crate) fn advance<T: Coord>(
    poly: &[Vector2<T>],
    cursor: &mut Cursor,
    insert: bool,
    out: &mut Vec<Vector2<T>>,
) {
    if insert {
        let p = poly[cursor.dest];
        if out.last().map_or(true, |&q| !points_equal(p, q)) {
            out.push(p);
        }
    }
    cursor.step();
}
