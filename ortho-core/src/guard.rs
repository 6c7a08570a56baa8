//! Self-intersection guard.
//!
//! Runs after every growth step and inspects the newest segment of a path
//! against the rest of that path. The segment immediately before the newest
//! one shares its start vertex by construction and is exempt; every other
//! segment (and vertex) is fair game.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::intersect::intersect;
use crate::path::Path;

/// A way in which a path touched itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The newest segment crosses or touches an earlier segment.
    Crossing {
        /// Where the two segments meet.
        point: Point,
        /// Index of the newest segment.
        newest: usize,
        /// Index of the earlier segment.
        other: usize,
    },
    /// The newest segment repeats an earlier one, in either orientation.
    DuplicateSegment {
        /// Index of the newest segment.
        newest: usize,
        /// Index of the repeated segment.
        other: usize,
    },
    /// An endpoint of the newest segment lands on an earlier vertex.
    RevisitedPoint {
        /// The revisited vertex.
        point: Point,
        /// Index of the earlier vertex in the path.
        vertex: usize,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crossing {
                point,
                newest,
                other,
            } => write!(f, "segment {newest} crosses segment {other} at {point}"),
            Self::DuplicateSegment { newest, other } => {
                write!(f, "segment {newest} duplicates segment {other}")
            }
            Self::RevisitedPoint { point, vertex } => {
                write!(f, "vertex {vertex} at {point} revisited")
            }
        }
    }
}

/// What to do when the guard reports a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationPolicy {
    /// Drop the last two growth steps and stop growing the path.
    #[default]
    Rollback,
    /// Abort the whole run with an error.
    HardFail,
}

impl ViolationPolicy {
    /// Number of trailing points discarded on rollback.
    pub const ROLLBACK_STEPS: usize = 2;
}

/// Check the newest segment of `path` against the rest of the path.
///
/// Duplicate segments are reported first, then revisited vertices, then
/// geometric crossings; within each kind the earliest offender wins.
/// Paths with fewer than three segments cannot violate.
#[must_use]
pub fn check_newest(path: &Path) -> Option<Violation> {
    let count = path.segment_count();
    if count < 3 {
        return None;
    }
    let newest_index = count - 1;
    let newest = path.segment(newest_index)?;
    let points = path.points();

    let earlier = newest_index - 1;

    if let Some(other) = path
        .segments()
        .take(earlier)
        .position(|segment| newest.same_endpoints(&segment))
    {
        return Some(Violation::DuplicateSegment {
            newest: newest_index,
            other,
        });
    }

    // Vertices before the adjacent segment's start.
    for (vertex, &point) in points.iter().enumerate().take(earlier) {
        if point == newest.a || point == newest.b {
            return Some(Violation::RevisitedPoint { point, vertex });
        }
    }

    for (other, segment) in path.segments().enumerate().take(earlier) {
        if let Some(point) = intersect(&newest, &segment) {
            return Some(Violation::Crossing {
                point,
                newest: newest_index,
                other,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(points: &[(i32, i32)]) -> Path {
        Path::try_from(points.iter().copied().map(Point::from).collect::<Vec<_>>())
            .expect("non-empty")
    }

    #[test]
    fn test_short_paths_never_violate() {
        assert_eq!(check_newest(&path_of(&[(0, 0)])), None);
        assert_eq!(check_newest(&path_of(&[(0, 0), (10, 0)])), None);
        assert_eq!(check_newest(&path_of(&[(0, 0), (10, 0), (10, 10)])), None);
    }

    #[test]
    fn test_spiral_is_clean() {
        let path = path_of(&[(50, 50), (150, 50), (150, 150), (80, 150), (80, 90)]);
        assert_eq!(check_newest(&path), None);
    }

    #[test]
    fn test_crossing_detected() {
        // Up through the first horizontal run.
        let path = path_of(&[(50, 50), (150, 50), (150, 100), (100, 100), (100, 20)]);
        assert_eq!(
            check_newest(&path),
            Some(Violation::Crossing {
                point: Point::new(100, 50),
                newest: 3,
                other: 0,
            })
        );
    }

    #[test]
    fn test_revisited_seed_detected() {
        let path = path_of(&[(50, 50), (100, 50), (100, 100), (50, 100), (50, 50)]);
        assert_eq!(
            check_newest(&path),
            Some(Violation::RevisitedPoint {
                point: Point::new(50, 50),
                vertex: 0,
            })
        );
    }

    #[test]
    fn test_duplicate_segment_detected() {
        // A bent path whose last segment retraces the first one.
        let path = Path::try_from(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
            Point::new(0, 0),
            Point::new(10, 0),
        ])
        .expect("non-empty");
        assert_eq!(
            check_newest(&path),
            Some(Violation::DuplicateSegment {
                newest: 4,
                other: 0,
            })
        );
    }

    #[test]
    fn test_adjacent_segment_is_exempt() {
        // The L-corner between segment 1 and segment 2 is legal.
        let path = path_of(&[(0, 0), (0, 40), (40, 40), (40, 80)]);
        assert_eq!(check_newest(&path), None);
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::Crossing {
            point: Point::new(1, 2),
            newest: 4,
            other: 1,
        };
        assert_eq!(v.to_string(), "segment 4 crosses segment 1 at (1, 2)");
    }
}
