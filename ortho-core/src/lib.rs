//! # Ortho Lines Core
//!
//! Procedural generation of orthogonal line art.
//! Pure computation, no I/O: the renderer crate turns the output into pixels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Orchestrator                │
//! │  - Tile grid layout  - Per-tile RNG streams │
//! ├──────────────────────┬──────────────────────┤
//! │  Path Generator      │  Cross-Path          │
//! │  - Random walk       │  Accumulator         │
//! │  - Axis alternation  │  - Crossing markers  │
//! ├──────────────────────┴──────────────────────┤
//! │  Self-Intersection Guard (rollback/abort)   │
//! ├─────────────────────────────────────────────┤
//! │  Segment Intersection Detector              │
//! ├─────────────────────────────────────────────┤
//! │  Geometry: Point, Segment, Bounds           │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod accumulate;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod guard;
pub mod intersect;
pub mod orchestrator;
pub mod path;
pub mod random;

pub use accumulate::{accumulate, Intersection};
pub use config::{OrthoConfig, MAX_PATHS_PER_TILE};
pub use error::{OrthoError, OrthoResult};
pub use generator::{GeneratedPath, GrowthState, PathGenerator, Termination};
pub use geometry::{snap, Axis, Bounds, Direction, Point, Segment};
pub use guard::{check_newest, Violation, ViolationPolicy};
pub use intersect::{intersect, intersect_paths};
pub use orchestrator::{Artwork, GridLayout, Orchestrator, Tile, TileGenerator, TracedPath};
pub use path::Path;
pub use random::{tile_seed, RandomStream, ScriptedStream, SeededStream};

/// Ortho core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
