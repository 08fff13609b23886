//! Closed classification types shared by the predicates and the clip walk.
//!
//! - `EdgeClass`: where a point sits relative to a directed edge.
//! - `EdgeOrient`: how two directed segments relate.
//! - `Winding`: rotational direction of a vertex ring.

/// Position of a point relative to a directed edge `org → dest`.
///
/// `Left` is the side of positive signed area (counter-clockwise turn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    Left,
    Right,
    /// On the supporting line, before the origin.
    Behind,
    /// On the supporting line, past the destination.
    Beyond,
    Origin,
    Destination,
    /// On the segment, strictly between its endpoints.
    Between,
}

impl EdgeClass {
    /// True for the three classes that put the point on the closed segment.
    #[inline]
    pub fn on_segment(self) -> bool {
        matches!(
            self,
            EdgeClass::Origin | EdgeClass::Destination | EdgeClass::Between
        )
    }
}

/// Relationship between two directed segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeOrient {
    /// Lines cross transversally and the crossing lies on both segments.
    SkewCross,
    /// Lines cross transversally outside at least one segment.
    SkewNoCross,
    /// Both segments lie on the same line.
    Collinear,
    /// Distinct parallel lines.
    Parallel,
}

/// Rotational direction in which a ring lists its vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}
