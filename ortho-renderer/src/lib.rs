//! # Ortho Lines Renderer
//!
//! Turns generated [`Artwork`] into images. The core crate decides geometry;
//! this crate only strokes it.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ Artwork  │ ─▶ │ SVG document │ ─▶ │ usvg/resvg/skia  │ ─▶ PNG
//! └──────────┘    └──────────────┘    └──────────────────┘
//!       │
//!       └──────────▶ JSON (serde_json)
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use export::{ArtworkExporter, ExportConfig, ExportFormat};
pub use svg::SvgRenderer;

use ortho_core::Artwork;
use serde::{Deserialize, Serialize};

/// Stroke and marker styling.
///
/// A single palette for the whole artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background colour.
    pub background: String,
    /// Path stroke colour.
    pub stroke: String,
    /// Path stroke width in pixels.
    pub stroke_width: f32,
    /// Intersection marker colour.
    pub marker: String,
    /// Side length of the square intersection marker.
    pub marker_size: f32,
    /// Tile border colour; `None` draws no borders.
    pub tile_border: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            stroke: "#B2ACFF".to_string(),
            stroke_width: 4.0,
            marker: "#FF0000".to_string(),
            marker_size: 10.0,
            tile_border: Some("#FFFFFF".to_string()),
        }
    }
}

/// Count what a renderer would draw, without drawing it.
///
/// Returns `(polylines, markers)`; zero-segment paths contribute no polyline.
#[must_use]
pub fn drawable_counts(artwork: &Artwork) -> (usize, usize) {
    artwork
        .traced_paths()
        .fold((0, 0), |(lines, markers), (_, traced)| {
            let line = usize::from(traced.path.segment_count() > 0);
            (lines + line, markers + traced.intersections.len())
        })
}
