//! # Outline Mesh
//!
//! Offline preprocessing for outline/silhouette rendering. Converts a
//! triangle mesh into an edge adjacency table: one record per unique
//! geometric edge, carrying the third vertex of each adjacent triangle
//! (up to two). The renderer expands every record into a screen-space quad.
//!
//! ## Architecture
//!
//! ```text
//! mesh asset (positions + indices) → outline-mesh (EdgeAdjacencyTable) → GPU buffers
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::build_edge_adjacency;
//! use glam::DVec3;
//!
//! let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
//! let table = build_edge_adjacency(positions, vec![0, 1, 2]).unwrap();
//! assert_eq!(table.len(), 3);
//! ```

pub mod adjacency;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use adjacency::{EdgeAdjacency, EdgeAdjacencyTable};
pub use error::MeshError;
pub use mesh::Mesh;

use glam::DVec3;

/// Builds the edge adjacency table straight from raw asset buffers.
///
/// This is the main entry point for the preprocessing pipeline: it validates
/// the buffers, assembles the mesh, and extracts the adjacency records.
///
/// # Arguments
///
/// * `vertices` - Vertex positions from the loaded mesh asset
/// * `indices` - Flat triangle index list, three indices per triangle
///
/// # Returns
///
/// The insertion-ordered edge adjacency table.
///
/// # Errors
///
/// `MeshError::InvalidMesh` for malformed buffers (truncated index triples,
/// out-of-range indices, missing positions). No partial output is produced.
///
/// # Example
///
/// ```rust
/// use outline_mesh::build_edge_adjacency;
/// use glam::DVec3;
///
/// let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];
/// let table = build_edge_adjacency(positions, vec![0, 1, 2, 1, 3, 2]).unwrap();
/// assert_eq!(table.len(), 5);
/// ```
pub fn build_edge_adjacency(
    vertices: Vec<DVec3>,
    indices: Vec<u32>,
) -> Result<EdgeAdjacencyTable, MeshError> {
    let mesh = Mesh::from_buffers(vertices, indices)?;
    EdgeAdjacencyTable::build(&mesh)
}
