//! Generation settings.
//!
//! Loaded from JSON (every field optional) and overridable from the command line.

use serde::{Deserialize, Serialize};

use crate::error::{OrthoError, OrthoResult};
use crate::geometry::Bounds;
use crate::guard::ViolationPolicy;

/// Default maximum number of counted growth steps per path.
pub const DEFAULT_STEP_CAP: u32 = 10;

/// Upper limit on paths generated per tile.
pub const MAX_PATHS_PER_TILE: usize = 10_000;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrthoConfig {
    /// Tile width in pixels.
    pub width: u32,
    /// Tile height in pixels.
    pub height: u32,
    /// Border margin kept free inside every tile.
    pub padding: u32,
    /// Shortest step the walk may take.
    pub min_distance: u32,
    /// Growth stops once the step counter exceeds this value.
    pub step_cap: u32,
    /// Paths generated per tile.
    pub paths_per_tile: usize,
    /// Number of tiles; must be a perfect square.
    pub tiles: usize,
    /// Round every generated coordinate to a multiple of this value.
    pub snap: Option<u32>,
    /// Reaction to a self-intersecting path.
    pub policy: ViolationPolicy,
    /// Base seed; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            padding: 20,
            min_distance: 20,
            step_cap: DEFAULT_STEP_CAP,
            paths_per_tile: 3,
            tiles: 4,
            snap: None,
            policy: ViolationPolicy::Rollback,
            seed: None,
        }
    }
}

impl OrthoConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> OrthoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> OrthoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the settings describe a usable canvas.
    ///
    /// # Errors
    ///
    /// Returns [`OrthoError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> OrthoResult<()> {
        let bounds = self.bounds()?;
        if bounds.width <= 0 || bounds.height <= 0 {
            return Err(invalid("width and height must be positive"));
        }
        let margin = 3 * i64::from(bounds.padding);
        if i64::from(bounds.width) <= margin || i64::from(bounds.height) <= margin {
            return Err(invalid(format!(
                "padding {} leaves no seed area in a {}x{} tile",
                self.padding, self.width, self.height
            )));
        }
        if to_coord("min_distance", self.min_distance)? == 0 {
            return Err(invalid("min_distance must be at least 1"));
        }
        if self.tiles == 0 {
            return Err(invalid("tiles must be at least 1"));
        }
        let Some(side) = grid_side(self.tiles) else {
            return Err(invalid(format!(
                "tiles must be a perfect square, got {}",
                self.tiles
            )));
        };
        let fits = i32::try_from(side).ok().is_some_and(|side| {
            side.checked_mul(bounds.width).is_some() && side.checked_mul(bounds.height).is_some()
        });
        if !fits {
            return Err(invalid(format!(
                "a {side}x{side} grid of {}x{} tiles exceeds the coordinate range",
                self.width, self.height
            )));
        }
        if self.paths_per_tile > MAX_PATHS_PER_TILE {
            return Err(invalid(format!(
                "paths_per_tile must be at most {MAX_PATHS_PER_TILE}, got {}",
                self.paths_per_tile
            )));
        }
        if let Some(snap) = self.snap {
            if snap == 0 || snap > self.min_distance {
                return Err(invalid(format!(
                    "snap must be between 1 and min_distance ({}), got {snap}",
                    self.min_distance
                )));
            }
            if self.padding % snap != 0 || self.width % snap != 0 || self.height % snap != 0 {
                return Err(invalid(format!(
                    "padding, width and height must be multiples of snap ({snap})"
                )));
            }
        }
        Ok(())
    }

    /// Hard bounds of a single tile.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension does not fit the coordinate type.
    pub fn bounds(&self) -> OrthoResult<Bounds> {
        Ok(Bounds::new(
            to_coord("width", self.width)?,
            to_coord("height", self.height)?,
            to_coord("padding", self.padding)?,
        ))
    }
}

/// Side length of a square grid holding `tiles` tiles, if `tiles` is a perfect square.
#[must_use]
pub fn grid_side(tiles: usize) -> Option<usize> {
    let side = tiles.isqrt();
    (side * side == tiles).then_some(side)
}

fn to_coord(name: &str, value: u32) -> OrthoResult<i32> {
    i32::try_from(value).map_err(|_| invalid(format!("{name} {value} is too large")))
}

fn invalid(message: impl Into<String>) -> OrthoError {
    OrthoError::InvalidConfig(message.into())
}
