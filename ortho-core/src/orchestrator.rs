//! Path set orchestration across a grid of tiles.
//!
//! ```text
//! ┌────────┬────────┐
//! │ tile 0 │ tile 1 │   Tiles are laid out row-major in a square grid.
//! ├────────┼────────┤   Each tile owns its own random stream and path
//! │ tile 2 │ tile 3 │   history; nothing is shared between tiles.
//! └────────┴────────┘
//! ```

use serde::Serialize;

use crate::accumulate::{accumulate, Intersection};
use crate::config::{grid_side, OrthoConfig};
use crate::error::{OrthoError, OrthoResult};
use crate::generator::{PathGenerator, Termination};
use crate::geometry::Point;
use crate::path::Path;
use crate::random::{tile_seed, RandomStream, SeededStream};

/// An accepted path with the crossings found when it was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TracedPath {
    /// The path itself.
    pub path: Path,
    /// Crossings with paths accepted earlier in the same tile.
    pub intersections: Vec<Intersection>,
    /// Why the path stopped growing.
    pub termination: Termination,
}

/// One tile's generated paths, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Position of the tile in the grid (row-major).
    pub index: usize,
    /// Top-left corner of the tile in artwork coordinates.
    pub origin: Point,
    /// Accepted paths.
    pub paths: Vec<TracedPath>,
}

impl Tile {
    /// Whether no path in the tile has a single segment.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.paths.iter().all(|p| p.path.segment_count() == 0)
    }

    /// Total crossings reported in this tile.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.paths.iter().map(|p| p.intersections.len()).sum()
    }
}

/// Square grid placement of equally sized tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    /// Tiles per row and per column.
    pub side: usize,
    /// Width of one tile.
    pub tile_width: i32,
    /// Height of one tile.
    pub tile_height: i32,
}

impl GridLayout {
    /// Layout for `count` tiles of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or not a perfect square, or if the
    /// whole grid does not fit the coordinate range.
    pub fn for_tiles(count: usize, tile_width: i32, tile_height: i32) -> OrthoResult<Self> {
        let side = match grid_side(count) {
            Some(side) if side > 0 => side,
            _ => {
                return Err(OrthoError::InvalidConfig(format!(
                    "cannot lay out {count} tiles in a square grid"
                )))
            }
        };
        let fits = i32::try_from(side).ok().is_some_and(|side| {
            side.checked_mul(tile_width).is_some() && side.checked_mul(tile_height).is_some()
        });
        if !fits {
            return Err(OrthoError::InvalidConfig(format!(
                "a {side}x{side} grid of {tile_width}x{tile_height} tiles exceeds the coordinate range"
            )));
        }
        Ok(Self {
            side,
            tile_width,
            tile_height,
        })
    }

    /// Number of tiles in the grid.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.side * self.side
    }

    /// Top-left corner of tile `index`, or `None` outside the grid.
    #[must_use]
    pub fn origin(&self, index: usize) -> Option<Point> {
        if index >= self.tile_count() {
            return None;
        }
        let column = i32::try_from(index % self.side).ok()?;
        let row = i32::try_from(index / self.side).ok()?;
        Some(Point::new(
            column.checked_mul(self.tile_width)?,
            row.checked_mul(self.tile_height)?,
        ))
    }

    /// Width of the whole grid.
    #[must_use]
    pub fn total_width(&self) -> i32 {
        self.span(self.tile_width)
    }

    /// Height of the whole grid.
    #[must_use]
    pub fn total_height(&self) -> i32 {
        self.span(self.tile_height)
    }

    fn span(&self, tile: i32) -> i32 {
        i32::try_from(self.side)
            .unwrap_or(i32::MAX)
            .saturating_mul(tile)
    }
}

/// Generates the paths of a single tile against its own history.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    generator: PathGenerator,
    paths_per_tile: usize,
}

impl TileGenerator {
    /// Create a tile generator producing `paths_per_tile` paths.
    #[must_use]
    pub const fn new(generator: PathGenerator, paths_per_tile: usize) -> Self {
        Self {
            generator,
            paths_per_tile,
        }
    }

    /// Generate tile `index` placed at `origin`, drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`OrthoError::SelfIntersection`] when a path violates the
    /// guard under the hard-fail policy.
    pub fn generate<R: RandomStream + ?Sized>(
        &self,
        index: usize,
        origin: Point,
        rng: &mut R,
    ) -> OrthoResult<Tile> {
        let mut history: Vec<Path> = Vec::new();
        let mut traces = Vec::new();

        for path_index in 0..self.paths_per_tile {
            let generated =
                self.generator
                    .generate(rng)
                    .map_err(|violation| OrthoError::SelfIntersection {
                        tile: index,
                        path: path_index,
                        violation,
                    })?;
            let intersections = accumulate(&history, &generated.path);
            history.push(generated.path);
            traces.push((intersections, generated.termination));
        }

        let paths = history
            .into_iter()
            .zip(traces)
            .map(|(path, (intersections, termination))| TracedPath {
                path,
                intersections,
                termination,
            })
            .collect();

        let tile = Tile {
            index,
            origin,
            paths,
        };
        tracing::debug!(
            tile = index,
            paths = tile.paths.len(),
            intersections = tile.intersection_count(),
            degenerate = tile.is_degenerate(),
            "Tile generated"
        );
        Ok(tile)
    }
}

/// The full output of a run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    /// Settings the artwork was generated with.
    pub config: OrthoConfig,
    /// Base seed the tile streams were derived from.
    pub seed: u64,
    /// Placement of the tiles.
    pub grid: GridLayout,
    /// Tiles in grid order.
    pub tiles: Vec<Tile>,
}

impl Artwork {
    /// Every path in rendering order, with the tile it belongs to.
    pub fn traced_paths(&self) -> impl Iterator<Item = (&Tile, &TracedPath)> {
        self.tiles
            .iter()
            .flat_map(|tile| tile.paths.iter().map(move |path| (tile, path)))
    }

    /// Total number of paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.tiles.iter().map(|t| t.paths.len()).sum()
    }

    /// Total number of crossings.
    #[must_use]
    pub fn intersection_count(&self) -> usize {
        self.tiles.iter().map(Tile::intersection_count).sum()
    }
}

/// Runs tile generation for a whole configuration.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: OrthoConfig,
    grid: GridLayout,
    tiles: TileGenerator,
}

impl Orchestrator {
    /// Prepare a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: OrthoConfig) -> OrthoResult<Self> {
        let generator = PathGenerator::from_config(&config)?;
        let bounds = *generator.bounds();
        let grid = GridLayout::for_tiles(config.tiles, bounds.width, bounds.height)?;
        let tiles = TileGenerator::new(generator, config.paths_per_tile);
        Ok(Self {
            config,
            grid,
            tiles,
        })
    }

    /// The run's configuration.
    #[must_use]
    pub const fn config(&self) -> &OrthoConfig {
        &self.config
    }

    /// The run's grid layout.
    #[must_use]
    pub const fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Generate all tiles, using the configured seed or a fresh random one.
    ///
    /// # Errors
    ///
    /// Returns an error if a tile fails under the hard-fail policy.
    pub fn run(&self) -> OrthoResult<Artwork> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.run_with_seed(seed)
    }

    /// Generate all tiles from `seed`.
    ///
    /// Tile `i` draws from its own stream seeded with [`tile_seed`]`(seed, i)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tile fails under the hard-fail policy.
    pub fn run_with_seed(&self, seed: u64) -> OrthoResult<Artwork> {
        tracing::info!(
            seed,
            tiles = self.grid.tile_count(),
            paths_per_tile = self.config.paths_per_tile,
            "Generating artwork"
        );

        let tiles = (0..self.grid.tile_count())
            .map(|index| {
                let origin = self.grid.origin(index).ok_or_else(|| {
                    OrthoError::InvalidConfig(format!("tile {index} lies outside the grid"))
                })?;
                let mut rng = SeededStream::new(tile_seed(seed, index));
                self.tiles.generate(index, origin, &mut rng)
            })
            .collect::<OrthoResult<Vec<_>>>()?;

        let artwork = Artwork {
            config: OrthoConfig {
                seed: Some(seed),
                ..self.config.clone()
            },
            seed,
            grid: self.grid,
            tiles,
        };
        tracing::info!(
            paths = artwork.path_count(),
            intersections = artwork.intersection_count(),
            "Artwork generated"
        );
        Ok(artwork)
    }
}
