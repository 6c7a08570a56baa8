//! Segment intersection detector for axis-aligned geometry.
//!
//! Only perpendicular pairs can cross: a vertical segment at `x = vx` meets a
//! horizontal segment at `y = hy` when `vx` falls inside the horizontal x-range
//! and `hy` inside the vertical y-range. Bounds are inclusive, so touching
//! endpoints count. Parallel pairs, collinear overlap included, never intersect.

use crate::geometry::{Axis, Point, Segment};
use crate::path::Path;

/// Intersection point of two axis-aligned segments, if any.
///
/// Symmetric in its arguments.
#[must_use]
pub fn intersect(first: &Segment, second: &Segment) -> Option<Point> {
    let (vertical, horizontal) = match (first.is_vertical(), second.is_vertical()) {
        (true, false) => (first, second),
        (false, true) => (second, first),
        _ => return None,
    };

    let vx = vertical.a.x;
    let hy = horizontal.a.y;
    let (min_x, max_x) = horizontal.span(Axis::Horizontal);
    let (min_y, max_y) = vertical.span(Axis::Vertical);

    ((min_x..=max_x).contains(&vx) && (min_y..=max_y).contains(&hy)).then(|| Point::new(vx, hy))
}

/// Every crossing between the segments of two paths.
///
/// Ordered by segment of `first`, then segment of `second`. Crossings that
/// land on a shared vertex are reported once per contributing segment pair.
#[must_use]
pub fn intersect_paths(first: &Path, second: &Path) -> Vec<Point> {
    first
        .segments()
        .flat_map(move |s| second.segments().filter_map(move |t| intersect(&s, &t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (i32, i32), b: (i32, i32)) -> Segment {
        Segment::new(a.into(), b.into())
    }

    #[test]
    fn test_vertical_and_horizontal_cross() {
        let v = seg((200, 200), (200, 300));
        let h = seg((150, 250), (300, 250));
        assert_eq!(intersect(&v, &h), Some(Point::new(200, 250)));
    }

    #[test]
    fn test_out_of_range_does_not_cross() {
        let v = seg((200, 200), (200, 300));
        let h = seg((150, 100), (300, 100));
        assert_eq!(intersect(&v, &h), None);
    }

    #[test]
    fn test_symmetric() {
        let v = seg((200, 300), (200, 200));
        let h = seg((300, 250), (150, 250));
        assert_eq!(intersect(&v, &h), intersect(&h, &v));
        let miss = seg((150, 100), (300, 100));
        assert_eq!(intersect(&v, &miss), intersect(&miss, &v));
    }

    #[test]
    fn test_endpoints_count() {
        let v = seg((100, 100), (100, 200));
        let h = seg((100, 200), (300, 200));
        assert_eq!(intersect(&v, &h), Some(Point::new(100, 200)));
    }

    #[test]
    fn test_parallel_segments_never_intersect() {
        let a = seg((0, 0), (100, 0));
        let b = seg((50, 0), (150, 0));
        assert_eq!(intersect(&a, &b), None);

        let c = seg((10, 0), (10, 100));
        let d = seg((10, 50), (10, 150));
        assert_eq!(intersect(&c, &d), None);
    }

    #[test]
    fn test_intersect_paths_reports_all() {
        let mut comb = Path::seeded(Point::new(100, 50));
        comb.push(Point::new(100, 150));
        comb.push(Point::new(200, 150));
        comb.push(Point::new(200, 50));

        let mut bar = Path::seeded(Point::new(50, 100));
        bar.push(Point::new(250, 100));

        let hits = intersect_paths(&comb, &bar);
        assert_eq!(hits, vec![Point::new(100, 100), Point::new(200, 100)]);
        assert_eq!(intersect_paths(&comb, &bar), hits);
    }

    #[test]
    fn test_seed_only_path_has_no_intersections() {
        let lone = Path::seeded(Point::new(10, 10));
        let mut other = Path::seeded(Point::new(0, 10));
        other.push(Point::new(20, 10));
        assert!(intersect_paths(&lone, &other).is_empty());
        assert!(intersect_paths(&other, &lone).is_empty());
    }
}
