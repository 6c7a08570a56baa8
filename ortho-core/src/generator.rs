//! Orthogonal random-walk path generator.
//!
//! A path is seeded inside the inset seed rectangle, then grows one step at a
//! time. Each step turns onto the axis not used by the previous step, travels
//! at least `min_distance` towards the canvas edge, and is clamped to the hard
//! bounds. The walk ends when it hits a wall, gets stuck against one, trips
//! the self-intersection guard, or exceeds the step cap.
//!
//! Draw order is fixed (seed x, seed y, then direction and magnitude per
//! step), so a given [`RandomStream`] always yields the same path.

use serde::Serialize;

use crate::config::{OrthoConfig, DEFAULT_STEP_CAP};
use crate::error::OrthoResult;
use crate::geometry::{snap, Axis, Bounds, Direction, Point};
use crate::guard::{check_newest, Violation, ViolationPolicy};
use crate::path::Path;
use crate::random::RandomStream;

/// Lifecycle of a path under construction.
///
/// [`PathGenerator::generate`] advances this machine until it reaches
/// `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthState {
    /// Seed point placed, no steps taken.
    Seeded,
    /// Taking steps.
    Growing,
    /// Finished; the path is handed to the caller.
    Terminated(Termination),
}

/// Why a path stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// The last step was clamped at a canvas edge.
    HitWall,
    /// The step counter exceeded the cap.
    StepCap,
    /// The next step collapsed to zero length against an edge and was dropped.
    Stuck,
    /// The guard found a violation; the last two steps were discarded.
    RolledBack {
        /// What the guard detected.
        violation: Violation,
    },
}

/// A finished path and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPath {
    /// The accepted path.
    pub path: Path,
    /// Why growth stopped.
    pub termination: Termination,
    /// Value of the step counter when growth stopped.
    pub steps: u32,
}

/// Path under construction plus the walk's running state.
struct Walk {
    path: Path,
    previous: Option<Direction>,
    steps: u32,
}

/// Random-walk generator for a single tile's bounds.
#[derive(Debug, Clone)]
pub struct PathGenerator {
    bounds: Bounds,
    min_distance: i32,
    step_cap: u32,
    snap: Option<u32>,
    policy: ViolationPolicy,
}

impl PathGenerator {
    /// Default shortest step.
    pub const DEFAULT_MIN_DISTANCE: i32 = 20;

    /// Create a generator with default step settings.
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            step_cap: DEFAULT_STEP_CAP,
            snap: None,
            policy: ViolationPolicy::Rollback,
        }
    }

    /// Build a generator from validated run settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &OrthoConfig) -> OrthoResult<Self> {
        config.validate()?;
        let min_distance = i32::try_from(config.min_distance).unwrap_or(i32::MAX);
        Ok(Self::new(config.bounds()?)
            .with_min_distance(min_distance)
            .with_step_cap(config.step_cap)
            .with_snap(config.snap)
            .with_policy(config.policy))
    }

    /// Set the shortest step.
    #[must_use]
    pub const fn with_min_distance(mut self, min_distance: i32) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Set the step cap.
    #[must_use]
    pub const fn with_step_cap(mut self, step_cap: u32) -> Self {
        self.step_cap = step_cap;
        self
    }

    /// Set the coordinate snapping granularity.
    ///
    /// Walls stay on the grid only when the padding and tile dimensions are
    /// multiples of it; [`OrthoConfig::validate`] enforces that.
    #[must_use]
    pub const fn with_snap(mut self, snap: Option<u32>) -> Self {
        self.snap = snap;
        self
    }

    /// Set the violation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ViolationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bounds paths are confined to.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The step cap.
    #[must_use]
    pub const fn step_cap(&self) -> u32 {
        self.step_cap
    }

    /// The violation policy.
    #[must_use]
    pub const fn policy(&self) -> ViolationPolicy {
        self.policy
    }

    /// Grow one path from `rng`.
    ///
    /// # Errors
    ///
    /// Under [`ViolationPolicy::HardFail`], returns the violation that
    /// aborted growth. Under rollback this never fails.
    pub fn generate<R: RandomStream + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedPath, Violation> {
        let seed = self.seed_point(rng);
        let mut walk = Walk {
            path: Path::seeded(seed),
            previous: None,
            steps: 0,
        };

        let mut state = GrowthState::Seeded;
        let termination = loop {
            state = match state {
                GrowthState::Seeded => {
                    tracing::trace!(%seed, "Path seeded");
                    GrowthState::Growing
                }
                GrowthState::Growing => self.grow(&mut walk, rng)?,
                GrowthState::Terminated(termination) => break termination,
            };
        };

        tracing::debug!(
            ?termination,
            points = walk.path.len(),
            steps = walk.steps,
            "Path generated"
        );

        Ok(GeneratedPath {
            path: walk.path,
            termination,
            steps: walk.steps,
        })
    }

    /// Take one step of `walk` and report the resulting state.
    fn grow<R: RandomStream + ?Sized>(
        &self,
        walk: &mut Walk,
        rng: &mut R,
    ) -> Result<GrowthState, Violation> {
        let direction = Self::pick_direction(walk.previous, rng);
        walk.previous = Some(direction);

        let current = walk.path.last();
        let (next, hit_wall) = self.advance(current, direction, rng);
        if next == current {
            return Ok(GrowthState::Terminated(Termination::Stuck));
        }

        walk.path.push(next);
        tracing::trace!(?direction, %next, hit_wall, "Step taken");

        if let Some(violation) = check_newest(&walk.path) {
            return match self.policy {
                ViolationPolicy::HardFail => {
                    tracing::warn!(%violation, "Path intersects itself, aborting");
                    Err(violation)
                }
                ViolationPolicy::Rollback => {
                    walk.path.undo_last(ViolationPolicy::ROLLBACK_STEPS);
                    Ok(GrowthState::Terminated(Termination::RolledBack {
                        violation,
                    }))
                }
            };
        }

        if hit_wall {
            return Ok(GrowthState::Terminated(Termination::HitWall));
        }

        walk.steps += 1;
        if walk.steps > self.step_cap {
            return Ok(GrowthState::Terminated(Termination::StepCap));
        }
        Ok(GrowthState::Growing)
    }

    /// Draw a seed inside the inset rectangle.
    fn seed_point<R: RandomStream + ?Sized>(&self, rng: &mut R) -> Point {
        let (min_x, max_x) = self.bounds.seed_range(Axis::Horizontal);
        let (min_y, max_y) = self.bounds.seed_range(Axis::Vertical);
        let x = self.snap_coord(rng.next_in_range(min_x, max_x));
        let y = self.snap_coord(rng.next_in_range(min_y, max_y));
        self.bounds.clamp(Point::new(x, y)).0
    }

    /// Pick the next direction on the axis not used by `previous`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn pick_direction<R: RandomStream + ?Sized>(
        previous: Option<Direction>,
        rng: &mut R,
    ) -> Direction {
        let choices = Direction::choices_after(previous);
        let index = rng.next_in_range(0, choices.len() as i32).max(0) as usize;
        choices[index.min(choices.len() - 1)]
    }

    /// Move from `current` in `direction`, returning the clamped target and
    /// whether clamping kicked in.
    fn advance<R: RandomStream + ?Sized>(
        &self,
        current: Point,
        direction: Direction,
        rng: &mut R,
    ) -> (Point, bool) {
        let room = self.bounds.room(current, direction);
        let magnitude = rng.next_in_range(self.min_distance, room);
        let axis = direction.axis();
        let coord = current.along(axis);
        let raw = if direction.is_increasing() {
            coord.saturating_add(magnitude)
        } else {
            coord.saturating_sub(magnitude)
        };
        self.bounds
            .clamp(current.with_along(axis, self.snap_coord(raw)))
    }

    fn snap_coord(&self, value: i32) -> i32 {
        self.snap.map_or(value, |granularity| snap(value, granularity))
    }
}
