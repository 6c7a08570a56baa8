//! Error types for path generation.

use thiserror::Error;

use crate::guard::Violation;

/// Result type for core operations.
pub type OrthoResult<T> = Result<T, OrthoError>;

/// Errors that can occur while generating artwork.
#[derive(Debug, Error)]
pub enum OrthoError {
    /// Configuration values cannot produce a valid canvas.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A path touched or crossed itself under the hard-fail policy.
    #[error("Path {path} in tile {tile} intersects itself: {violation}")]
    SelfIntersection {
        /// Tile the path belongs to.
        tile: usize,
        /// Index of the path within its tile.
        path: usize,
        /// What the guard detected.
        violation: Violation,
    },

    /// Config or artwork serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
