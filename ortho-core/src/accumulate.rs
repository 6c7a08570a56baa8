//! Cross-path intersection accumulator.
//!
//! Crossings between different paths are allowed; they are only collected so
//! the renderer can mark them.

use serde::Serialize;

use crate::geometry::Point;
use crate::intersect::intersect_paths;
use crate::path::Path;

/// A crossing between a newly accepted path and an earlier one in the same tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Intersection {
    /// Where the paths cross.
    pub point: Point,
    /// Index of the earlier path in the tile's history.
    pub earlier: usize,
    /// Index of the newly accepted path.
    pub later: usize,
}

/// Intersections of `new_path` against every path in `history`.
///
/// `new_path` is the path about to take index `history.len()`; it is never
/// compared against itself. Within one earlier path each crossing point is
/// reported once, even when it sits on a shared vertex.
#[must_use]
pub fn accumulate(history: &[Path], new_path: &Path) -> Vec<Intersection> {
    let later = history.len();
    let mut found = Vec::new();

    for (earlier, other) in history.iter().enumerate() {
        let mut points = intersect_paths(other, new_path);
        points.sort_unstable();
        points.dedup();
        found.extend(points.into_iter().map(|point| Intersection {
            point,
            earlier,
            later,
        }));
    }

    if !found.is_empty() {
        tracing::trace!(path = later, crossings = found.len(), "Cross-path intersections");
    }
    found
}
