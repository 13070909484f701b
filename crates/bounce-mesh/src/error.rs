//! Error types for mesh generation.

use thiserror::Error;

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building primitive meshes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The requested shape name is not one of the supported primitives.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),

    /// A shape dimension is out of range.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A generated or supplied mesh is structurally broken.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

impl MeshError {
    /// Create an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(details: impl Into<String>) -> Self {
        Self::InvalidDimension(details.into())
    }

    /// Create an invalid mesh error.
    #[must_use]
    pub fn invalid_mesh(details: impl Into<String>) -> Self {
        Self::InvalidMesh(details.into())
    }
}
