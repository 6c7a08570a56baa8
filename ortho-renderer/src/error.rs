//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering artwork.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The SVG document could not be parsed for rasterization.
    #[error("SVG error: {0}")]
    Svg(String),

    /// Encoding to the requested format failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// The requested format is not compiled in.
    #[error("Format not supported in this build: {0}")]
    Unsupported(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
