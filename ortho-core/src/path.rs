//! Paths - ordered point sequences grown by the generator.

use serde::Serialize;

use crate::geometry::{Point, Segment};

/// An ordered sequence of points; consecutive points form segments.
///
/// A path always holds at least its seed point. A single-point path has no
/// segments and is a legal, if degenerate, result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Start a path at `seed`.
    #[must_use]
    pub fn seeded(seed: Point) -> Self {
        Self { points: vec![seed] }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Discard up to `n` trailing points, never the seed.
    ///
    /// Returns the number of points actually removed.
    pub fn undo_last(&mut self, n: usize) -> usize {
        let removable = n.min(self.points.len().saturating_sub(1));
        self.points.truncate(self.points.len() - removable);
        removable
    }

    /// All points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a path keeps its seed point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first point.
    #[must_use]
    pub fn seed(&self) -> Point {
        self.points[0]
    }

    /// The most recent point.
    #[must_use]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Segments formed by consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Segment at `index`, if present.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Segment> {
        Some(Segment::new(
            *self.points.get(index)?,
            *self.points.get(index + 1)?,
        ))
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = Vec<Point>;

    /// Build a path from raw points; fails on an empty list.
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        if points.is_empty() {
            Err(points)
        } else {
            Ok(Self { points })
        }
    }
}
