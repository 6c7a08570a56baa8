//! Path Generation Property Tests
//!
//! Checks the invariants every accepted path must hold, for arbitrary seeds
//! and canvas settings:
//! - Every point lies inside the hard bounds
//! - The first segment is horizontal and consecutive segments alternate axis
//! - No two non-adjacent segments of a path intersect
//! - Growth ends within the step cap
//! - The detector is symmetric and free of hidden state

use ortho_core::{
    intersect, intersect_paths, Axis, Bounds, GeneratedPath, Path, PathGenerator, Point, Segment,
    SeededStream, Termination,
};
use proptest::prelude::*;

/// Generator settings covering a broad range of canvases.
fn arb_generator() -> impl Strategy<Value = PathGenerator> {
    (
        100i32..800,
        100i32..800,
        0i32..30,
        1i32..60,
        0u32..16,
        prop::option::of(1u32..60),
    )
        .prop_map(|(width, height, padding, min_distance, step_cap, snap)| {
            let snap = snap.map(|s| s.min(min_distance.unsigned_abs()));
            PathGenerator::new(Bounds::new(width, height, padding))
                .with_min_distance(min_distance)
                .with_step_cap(step_cap)
                .with_snap(snap)
        })
}

fn arb_vertical() -> impl Strategy<Value = Segment> {
    (-500i32..500, -500i32..500, -500i32..500)
        .prop_map(|(x, y1, y2)| Segment::new(Point::new(x, y1), Point::new(x, y2)))
}

fn arb_horizontal() -> impl Strategy<Value = Segment> {
    (-500i32..500, -500i32..500, -500i32..500)
        .prop_map(|(y, x1, x2)| Segment::new(Point::new(x1, y), Point::new(x2, y)))
        .prop_filter("must not be vertical", |s| !s.is_vertical())
}

fn generate(generator: &PathGenerator, seed: u64) -> GeneratedPath {
    generator
        .generate(&mut SeededStream::new(seed))
        .expect("rollback policy never fails")
}

/// Every pair of non-adjacent segments that meet.
fn self_crossings(path: &Path) -> Vec<(usize, usize, Point)> {
    let segments: Vec<_> = path.segments().collect();
    let mut found = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 2) {
            if let Some(point) = intersect(a, b) {
                found.push((i, j, point));
            }
        }
    }
    found
}

proptest! {
    #[test]
    fn prop_points_stay_in_bounds(generator in arb_generator(), seed in any::<u64>()) {
        let generated = generate(&generator, seed);
        let bounds = generator.bounds();
        for point in generated.path.points() {
            prop_assert!(
                bounds.contains(*point),
                "point {} escaped bounds {:?}",
                point,
                bounds
            );
        }
    }

    #[test]
    fn prop_segments_alternate_axis(generator in arb_generator(), seed in any::<u64>()) {
        let generated = generate(&generator, seed);
        let segments: Vec<_> = generated.path.segments().collect();
        if let Some(first) = segments.first() {
            prop_assert_eq!(first.axis(), Axis::Horizontal);
        }
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].axis(), pair[1].axis());
        }
        for segment in &segments {
            prop_assert!(!segment.is_degenerate());
        }
    }

    #[test]
    fn prop_no_self_crossing(generator in arb_generator(), seed in any::<u64>()) {
        let generated = generate(&generator, seed);
        let crossings = self_crossings(&generated.path);
        prop_assert!(crossings.is_empty(), "self crossings: {:?}", crossings);
    }

    #[test]
    fn prop_growth_respects_step_cap(generator in arb_generator(), seed in any::<u64>()) {
        let generated = generate(&generator, seed);
        let cap = generator.step_cap();
        prop_assert!(!generated.path.is_empty());
        prop_assert!(generated.steps <= cap + 1);
        prop_assert!(generated.path.segment_count() <= cap as usize + 1);
        if generated.termination == Termination::StepCap {
            prop_assert_eq!(generated.steps, cap + 1);
            prop_assert_eq!(generated.path.segment_count(), cap as usize + 1);
        }
    }

    #[test]
    fn prop_same_seed_same_path(generator in arb_generator(), seed in any::<u64>()) {
        prop_assert_eq!(generate(&generator, seed), generate(&generator, seed));
    }

    #[test]
    fn prop_detector_is_symmetric(v in arb_vertical(), h in arb_horizontal()) {
        prop_assert_eq!(intersect(&v, &h), intersect(&h, &v));
        if let Some(point) = intersect(&v, &h) {
            prop_assert_eq!(point.x, v.a.x);
            prop_assert_eq!(point.y, h.a.y);
        }
    }

    #[test]
    fn prop_detector_is_idempotent(
        generator in arb_generator(),
        first in any::<u64>(),
        second in any::<u64>(),
    ) {
        let a = generate(&generator, first).path;
        let b = generate(&generator, second).path;
        let once = intersect_paths(&a, &b);
        let twice = intersect_paths(&a, &b);
        prop_assert_eq!(&once, &twice);
        let mut forward = once;
        let mut backward = intersect_paths(&b, &a);
        forward.sort_unstable();
        backward.sort_unstable();
        prop_assert_eq!(forward, backward);
    }
}
