//! Artwork export to files.
//!
//! Renders an [`Artwork`] to SVG, to PNG through the resvg/tiny-skia
//! rasterization pipeline, or to a JSON dump of the generated geometry.

use std::path::Path;

use ortho_core::Artwork;

use crate::error::{RenderError, RenderResult};
use crate::svg::SvgRenderer;
use crate::StyleConfig;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// SVG vector graphics (the XML string as UTF-8 bytes).
    Svg,
    /// PNG image.
    Png,
    /// Pretty-printed JSON of the artwork.
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension, case-insensitively.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Json => "json",
        }
    }
}

/// Configuration for artwork export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Scale factor for SVG size and PNG resolution (e.g. 4.0 for print).
    pub scale: f32,
    /// Colours and stroke widths.
    pub style: StyleConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            style: StyleConfig::default(),
        }
    }
}

/// Exports an [`Artwork`] to the supported formats.
#[derive(Debug, Clone, Default)]
pub struct ArtworkExporter {
    config: ExportConfig,
}

impl ArtworkExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub const fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// The exporter's configuration.
    #[must_use]
    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Export the artwork to the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if the artwork cannot be rendered or encoded.
    pub fn export(&self, artwork: &Artwork, format: ExportFormat) -> RenderResult<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Svg => self.render_to_svg(artwork).into_bytes(),
            ExportFormat::Png => self.render_to_png(artwork)?,
            ExportFormat::Json => Self::render_to_json(artwork)?.into_bytes(),
        };
        tracing::debug!(format = ?format, bytes = bytes.len(), "Artwork exported");
        Ok(bytes)
    }

    /// Export the artwork to an SVG string.
    #[must_use]
    pub fn render_to_svg(&self, artwork: &Artwork) -> String {
        self.svg_renderer().render(artwork)
    }

    /// Export the artwork to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization or encoding fails, or if PNG
    /// support is not compiled in.
    #[cfg(feature = "png")]
    pub fn render_to_png(&self, artwork: &Artwork) -> RenderResult<Vec<u8>> {
        let svg_string = self.render_to_svg(artwork);
        let pixmap = Self::rasterize_svg(&svg_string)?;

        pixmap
            .encode_png()
            .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))
    }

    /// Export the artwork to PNG bytes.
    ///
    /// # Errors
    ///
    /// Always fails: PNG support is not compiled in.
    #[cfg(not(feature = "png"))]
    #[allow(clippy::unused_self)]
    pub fn render_to_png(&self, _artwork: &Artwork) -> RenderResult<Vec<u8>> {
        Err(RenderError::Unsupported("png".to_string()))
    }

    /// Export the artwork to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_to_json(artwork: &Artwork) -> RenderResult<String> {
        Ok(serde_json::to_string_pretty(artwork)?)
    }

    fn svg_renderer(&self) -> SvgRenderer {
        SvgRenderer::new(self.config.style.clone()).with_scale(self.config.scale)
    }

    /// Rasterize an SVG string to a tiny-skia Pixmap.
    #[cfg(feature = "png")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn rasterize_svg(svg_string: &str) -> RenderResult<tiny_skia::Pixmap> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(svg_string, &opt)
            .map_err(|e| RenderError::Svg(format!("SVG parsing failed: {e}")))?;

        let px_w = tree.size().width() as u32;
        let px_h = tree.size().height() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(px_w.max(1), px_h.max(1))
            .ok_or_else(|| RenderError::Export("Failed to create pixmap".to_string()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_core::{Orchestrator, OrthoConfig};

    fn small_artwork() -> Artwork {
        let config = OrthoConfig {
            width: 120,
            height: 120,
            padding: 10,
            min_distance: 10,
            tiles: 1,
            seed: Some(8),
            ..OrthoConfig::default()
        };
        Orchestrator::new(config)
            .expect("config")
            .run()
            .expect("run")
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("svg"), Some(ExportFormat::Svg));
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(
            ExportFormat::from_extension("json"),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_extension("jpg"), None);
        assert_eq!(
            ExportFormat::from_path(Path::new("out/art.Svg")),
            Some(ExportFormat::Svg)
        );
        assert_eq!(ExportFormat::from_path(Path::new("art")), None);
        assert_eq!(ExportFormat::Png.extension(), "png");
    }

    #[test]
    fn test_export_dispatch() {
        let art = small_artwork();
        let exporter = ArtworkExporter::with_defaults();

        let svg = exporter.export(&art, ExportFormat::Svg).expect("svg");
        assert!(svg.starts_with(b"<svg"));

        let json = exporter.export(&art, ExportFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_slice(&json).expect("valid json");
        assert_eq!(value["seed"], 8);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_export_produces_valid_bytes() {
        let exporter = ArtworkExporter::with_defaults();
        let png = exporter.render_to_png(&small_artwork()).expect("png export");

        // PNG magic bytes: \x89PNG
        assert!(png.len() > 8);
        assert_eq!(&png[0..4], &[137, 80, 78, 71]);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_scale_factor() {
        let exporter = ArtworkExporter::new(ExportConfig {
            scale: 2.0,
            ..ExportConfig::default()
        });
        let pixmap = ArtworkExporter::rasterize_svg(&exporter.render_to_svg(&small_artwork()))
            .expect("rasterize");
        assert_eq!((pixmap.width(), pixmap.height()), (240, 240));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_rasterize_rejects_garbage() {
        let err = ArtworkExporter::rasterize_svg("not svg").unwrap_err();
        assert!(matches!(err, RenderError::Svg(_)));
    }
}
