//! Geometry primitives - points, axis-aligned segments, directions and canvas bounds.

use serde::{Deserialize, Serialize};

/// A point on the integer canvas grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (pixels from left).
    pub x: i32,
    /// Y coordinate (pixels from top).
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of this point with the coordinate along `axis` replaced.
    #[must_use]
    pub const fn with_along(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(value, self.y),
            Axis::Vertical => Self::new(self.x, value),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The axis a segment or step runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Along X; y is fixed.
    Horizontal,
    /// Along Y; x is fixed.
    Vertical,
}

/// An ordered pair of points.
///
/// Only axis-aligned segments are ever built. A segment is vertical iff
/// both endpoints share the same x; everything else counts as horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Segment {
    /// Create a segment from `a` to `b`.
    #[must_use]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Whether both endpoints share the same x coordinate.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// Axis classification of this segment.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        if self.is_vertical() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    /// Whether the segment has zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Equality of the endpoints as an unordered pair.
    #[must_use]
    pub fn same_endpoints(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Inclusive `(min, max)` range covered along `axis`.
    #[must_use]
    pub fn span(&self, axis: Axis) -> (i32, i32) {
        let (p, q) = (self.a.along(axis), self.b.along(axis));
        (p.min(q), p.max(q))
    }
}

/// A step direction for the random walk.
///
/// The "no previous step" sentinel is expressed as `Option<Direction>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the right edge.
    IncreaseX,
    /// Towards the left edge.
    DecreaseX,
    /// Towards the bottom edge.
    IncreaseY,
    /// Towards the top edge.
    DecreaseY,
}

impl Direction {
    /// All directions in the fixed order used for random selection.
    pub const ALL: [Self; 4] = [
        Self::IncreaseX,
        Self::DecreaseX,
        Self::IncreaseY,
        Self::DecreaseY,
    ];

    /// Axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::IncreaseX | Self::DecreaseX => Axis::Horizontal,
            Self::IncreaseY | Self::DecreaseY => Axis::Vertical,
        }
    }

    /// Whether the coordinate grows when moving this way.
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        matches!(self, Self::IncreaseX | Self::IncreaseY)
    }

    /// Legal directions following `previous`, in `ALL` order.
    ///
    /// After a step, only the perpendicular axis is allowed. The first step
    /// of a walk is always horizontal.
    #[must_use]
    pub fn choices_after(previous: Option<Self>) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|d| match previous {
                Some(p) => d.axis() != p.axis(),
                None => d.axis() == Axis::Horizontal,
            })
            .collect()
    }
}

/// The legal coordinate rectangle of one tile.
///
/// Every point must satisfy `padding <= coord <= dimension - padding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Tile width in pixels.
    pub width: i32,
    /// Tile height in pixels.
    pub height: i32,
    /// Border margin kept free on every side.
    pub padding: i32,
}

impl Bounds {
    /// Create bounds for a tile.
    #[must_use]
    pub const fn new(width: i32, height: i32, padding: i32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Tile dimension along `axis`.
    #[must_use]
    pub const fn dimension(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Inclusive hard limits along `axis`.
    #[must_use]
    pub const fn limits(&self, axis: Axis) -> (i32, i32) {
        (self.padding, self.dimension(axis) - self.padding)
    }

    /// Half-open range seed coordinates are drawn from along `axis`.
    ///
    /// Tighter than the hard limits so a fresh path has room for a first step.
    #[must_use]
    pub const fn seed_range(&self, axis: Axis) -> (i32, i32) {
        (self.padding, self.dimension(axis) - 2 * self.padding)
    }

    /// Whether `point` lies inside the hard limits on both axes.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        [Axis::Horizontal, Axis::Vertical].into_iter().all(|axis| {
            let (lo, hi) = self.limits(axis);
            (lo..=hi).contains(&point.along(axis))
        })
    }

    /// Clamp `point` into the hard limits.
    ///
    /// Returns the clamped point and whether any coordinate changed.
    #[must_use]
    pub fn clamp(&self, point: Point) -> (Point, bool) {
        let (min_x, max_x) = self.limits(Axis::Horizontal);
        let (min_y, max_y) = self.limits(Axis::Vertical);
        let clamped = Point::new(point.x.clamp(min_x, max_x), point.y.clamp(min_y, max_y));
        (clamped, clamped != point)
    }

    /// Distance from `point` to the canvas edge in the direction of travel.
    #[must_use]
    pub const fn room(&self, point: Point, direction: Direction) -> i32 {
        let axis = direction.axis();
        let coord = point.along(axis);
        if direction.is_increasing() {
            self.dimension(axis) - coord
        } else {
            coord
        }
    }
}

/// Round `value` to the nearest multiple of `granularity`.
///
/// Ties round towards positive infinity. A granularity of 0 or 1 leaves the value unchanged.
#[must_use]
pub fn snap(value: i32, granularity: u32) -> i32 {
    let Ok(step) = i32::try_from(granularity) else {
        return value;
    };
    if step <= 1 {
        return value;
    }
    let rem = value.rem_euclid(step);
    let down = value - rem;
    if rem * 2 >= step {
        down + step
    } else {
        down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_classification() {
        let v = Segment::new(Point::new(200, 200), Point::new(200, 300));
        let h = Segment::new(Point::new(150, 250), Point::new(300, 250));
        assert!(v.is_vertical());
        assert_eq!(v.axis(), Axis::Vertical);
        assert!(!h.is_vertical());
        assert_eq!(h.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_same_endpoints_is_unordered() {
        let s = Segment::new(Point::new(1, 2), Point::new(1, 9));
        let r = Segment::new(Point::new(1, 9), Point::new(1, 2));
        assert!(s.same_endpoints(&r));
        assert!(!s.same_endpoints(&Segment::new(Point::new(1, 2), Point::new(1, 8))));
    }

    #[test]
    fn test_choices_after_alternate_axis() {
        assert_eq!(
            Direction::choices_after(None),
            vec![Direction::IncreaseX, Direction::DecreaseX]
        );
        assert_eq!(
            Direction::choices_after(Some(Direction::IncreaseX)),
            vec![Direction::IncreaseY, Direction::DecreaseY]
        );
        assert_eq!(
            Direction::choices_after(Some(Direction::DecreaseY)),
            vec![Direction::IncreaseX, Direction::DecreaseX]
        );
    }

    #[test]
    fn test_bounds_clamp_reports_change() {
        let bounds = Bounds::new(400, 400, 20);
        assert_eq!(bounds.clamp(Point::new(50, 60)), (Point::new(50, 60), false));
        assert_eq!(bounds.clamp(Point::new(395, 60)), (Point::new(380, 60), true));
        assert_eq!(bounds.clamp(Point::new(50, -3)), (Point::new(50, 20), true));
        assert!(bounds.contains(Point::new(20, 380)));
        assert!(!bounds.contains(Point::new(19, 380)));
    }

    #[test]
    fn test_room_in_direction_of_travel() {
        let bounds = Bounds::new(400, 300, 20);
        let p = Point::new(100, 50);
        assert_eq!(bounds.room(p, Direction::IncreaseX), 300);
        assert_eq!(bounds.room(p, Direction::DecreaseX), 100);
        assert_eq!(bounds.room(p, Direction::IncreaseY), 250);
        assert_eq!(bounds.room(p, Direction::DecreaseY), 50);
    }

    #[test]
    fn test_seed_range_is_inset() {
        let bounds = Bounds::new(400, 200, 20);
        assert_eq!(bounds.seed_range(Axis::Horizontal), (20, 360));
        assert_eq!(bounds.seed_range(Axis::Vertical), (20, 160));
    }

    #[test]
    fn test_snap_rounds_to_nearest() {
        assert_eq!(snap(44, 10), 40);
        assert_eq!(snap(45, 10), 50);
        assert_eq!(snap(-4, 10), 0);
        assert_eq!(snap(-6, 10), -10);
        assert_eq!(snap(123, 1), 123);
        assert_eq!(snap(123, 0), 123);
    }
}
