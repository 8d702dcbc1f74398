//! # Mesh Errors
//!
//! Error types for mesh ingestion and adjacency extraction.

use thiserror::Error;

/// Errors that can occur while preparing outline data.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed input mesh (bad indices or position data)
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
