//! SVG document rendering.
//!
//! Every tile becomes a `<g>` translated to its grid origin, so path
//! coordinates are written exactly as generated.

use std::fmt::Write;

use ortho_core::{Artwork, Point, Tile, TracedPath};

use crate::StyleConfig;

/// Writes artwork as an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    style: StyleConfig,
    scale: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl SvgRenderer {
    /// Create a renderer with the given style at 1x scale.
    #[must_use]
    pub const fn new(style: StyleConfig) -> Self {
        Self { style, scale: 1.0 }
    }

    /// Set the output scale. The `viewBox` keeps the unscaled artwork size.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The style in use.
    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Output size in pixels, never smaller than 1x1.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn output_dimensions(&self, artwork: &Artwork) -> (u32, u32) {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        let out_w = (artwork.grid.total_width().max(1) as f32 * scale) as u32;
        let out_h = (artwork.grid.total_height().max(1) as f32 * scale) as u32;
        (out_w.max(1), out_h.max(1))
    }

    /// Render the whole artwork.
    #[must_use]
    pub fn render(&self, artwork: &Artwork) -> String {
        let (out_w, out_h) = self.output_dimensions(artwork);
        let view_w = artwork.grid.total_width();
        let view_h = artwork.grid.total_height();

        let mut svg = String::with_capacity(4096);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_w}\" height=\"{out_h}\" viewBox=\"0 0 {view_w} {view_h}\">",
        );
        let _ = write!(
            svg,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(&self.style.background),
        );

        for tile in &artwork.tiles {
            self.render_tile(&mut svg, tile, artwork);
        }

        svg.push_str("</svg>");
        tracing::debug!(
            bytes = svg.len(),
            width = out_w,
            height = out_h,
            "SVG rendered"
        );
        svg
    }

    fn render_tile(&self, svg: &mut String, tile: &Tile, artwork: &Artwork) {
        let _ = write!(
            svg,
            "<g transform=\"translate({},{})\">",
            tile.origin.x, tile.origin.y
        );

        for traced in &tile.paths {
            self.render_path(svg, traced);
        }
        for traced in &tile.paths {
            for crossing in &traced.intersections {
                self.render_marker(svg, crossing.point);
            }
        }

        if let Some(border) = &self.style.tile_border {
            let _ = write!(
                svg,
                "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
                artwork.grid.tile_width,
                artwork.grid.tile_height,
                escape_xml(border),
            );
        }

        svg.push_str("</g>");
    }

    fn render_path(&self, svg: &mut String, traced: &TracedPath) {
        // A seed-only path has nothing to stroke.
        if traced.path.segment_count() == 0 {
            return;
        }
        let points = traced
            .path
            .points()
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            svg,
            "<polyline points=\"{points}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"square\" stroke-linejoin=\"miter\"/>",
            escape_xml(&self.style.stroke),
            self.style.stroke_width,
        );
    }

    fn render_marker(&self, svg: &mut String, point: Point) {
        let size = self.style.marker_size;
        let half = size / 2.0;
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" fill=\"{}\"/>",
            f64::from(point.x) - f64::from(half),
            f64::from(point.y) - f64::from(half),
            escape_xml(&self.style.marker),
        );
    }
}

/// Render `artwork` with `style` at 1x scale.
#[must_use]
pub fn render_artwork(artwork: &Artwork, style: &StyleConfig) -> String {
    SvgRenderer::new(style.clone()).render(artwork)
}

/// Escape special XML characters in attribute values.
fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
