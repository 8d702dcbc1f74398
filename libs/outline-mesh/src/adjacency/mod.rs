//! # Edge Adjacency Extraction
//!
//! Derives, from a triangle mesh, the set of unique undirected edges together
//! with the third vertex of each adjacent triangle (up to two per edge). The
//! renderer later expands each record into a screen-space quad for outline
//! drawing.
//!
//! ## Edge identity
//!
//! Edges are deduplicated by the **geometric positions** of their endpoints,
//! not by vertex index. Meshes exported with UV seams or hard normals carry
//! several vertex indices at one position; the outline pass needs exactly one
//! record per geometric edge. Positions are quantized onto an i64 lattice
//! (`POSITION_QUANT_SCALE`) and the endpoint pair is canonically ordered, so
//! `{p1, p2}` and `{p2, p1}` hash to the same key.
//!
//! ## Example
//!
//! ```rust
//! use outline_mesh::{EdgeAdjacencyTable, Mesh};
//! use glam::DVec3;
//!
//! let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];
//! let mesh = Mesh::from_buffers(positions, vec![0, 1, 2, 1, 3, 2]).unwrap();
//!
//! let table = EdgeAdjacencyTable::build(&mesh).unwrap();
//! assert_eq!(table.len(), 5); // 6 triangle edges, one shared
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use config::constants::POSITION_QUANT_SCALE;
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

#[cfg(test)]
mod tests;

/// GPU encoding for "no second adjacent triangle".
const NO_OPPOSITE: i32 = -1;

/// Quantized vertex position used for geometric identity.
///
/// Coordinates are scaled by `POSITION_QUANT_SCALE` and rounded, so positions
/// that agree to within the lattice spacing compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct PositionKey {
    x: i64,
    y: i64,
    z: i64,
}

impl PositionKey {
    /// Creates a position key from a 3D position.
    fn from_position(pos: DVec3) -> Self {
        Self {
            x: (pos.x * POSITION_QUANT_SCALE).round() as i64,
            y: (pos.y * POSITION_QUANT_SCALE).round() as i64,
            z: (pos.z * POSITION_QUANT_SCALE).round() as i64,
        }
    }
}

/// Order-independent identity of an undirected mesh edge.
///
/// The two endpoint keys are stored in canonical (sorted) order so that
/// `{p1, p2}` and `{p2, p1}` produce identical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeKey {
    a: PositionKey,
    b: PositionKey,
}

impl EdgeKey {
    /// Creates a canonical edge key from two endpoint positions.
    fn new(p1: DVec3, p2: DVec3) -> Self {
        let a = PositionKey::from_position(p1);
        let b = PositionKey::from_position(p2);
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}

/// One unique undirected mesh edge with the third vertex of each owning
/// triangle.
///
/// The renderer expands this record into a screen-space quad ("degraded
/// rectangle"): the edge endpoints span the quad, the opposite vertices
/// decide silhouette visibility.
///
/// # Fields
///
/// - `vertex1`, `vertex2`: endpoint indices, in first-encountered order
/// - `opposite1`: third vertex of the first triangle owning this edge
/// - `opposite2`: third vertex of the second owning triangle, `None` for a
///   boundary edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAdjacency {
    /// First endpoint vertex index
    pub vertex1: u32,
    /// Second endpoint vertex index
    pub vertex2: u32,
    /// Third vertex of the first adjacent triangle
    pub opposite1: u32,
    /// Third vertex of the second adjacent triangle (None on mesh boundary)
    pub opposite2: Option<u32>,
}

impl EdgeAdjacency {
    /// Returns true if the edge belongs to exactly one triangle.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.opposite2.is_none()
    }
}

/// Insertion-ordered sequence of edge adjacency records for one mesh.
///
/// Built once from a static mesh asset, then treated as immutable; the
/// rendering side uploads the flat export verbatim.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{EdgeAdjacencyTable, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_buffers(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![0, 1, 2],
/// ).unwrap();
///
/// let table = EdgeAdjacencyTable::build(&mesh).unwrap();
/// assert_eq!(table.len(), 3);
/// assert!(table.records().iter().all(|r| r.is_boundary()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAdjacencyTable {
    records: Vec<EdgeAdjacency>,
}

impl EdgeAdjacencyTable {
    /// Builds the edge adjacency table for a mesh.
    ///
    /// Walks the triangle list in input order; each triangle `(v1, v2, v3)`
    /// contributes `(v1,v2)` opposite `v3`, `(v2,v3)` opposite `v1` and
    /// `(v3,v1)` opposite `v2`, in that rotation. The first triangle owning
    /// an edge fills `opposite1`, the second fills `opposite2`, any further
    /// triangle on the same edge (non-manifold mesh) is silently dropped.
    /// Record order is first-discovery order.
    ///
    /// # Errors
    ///
    /// `MeshError::InvalidMesh` if any triangle references a vertex outside
    /// the position array. No partial table is produced.
    pub fn build(mesh: &Mesh) -> Result<Self, MeshError> {
        // Reject malformed input up front so the scan cannot emit a partial
        // table.
        let vertex_count = mesh.vertex_count() as u32;
        for tri in mesh.triangles() {
            for &index in tri {
                if index >= vertex_count {
                    return Err(MeshError::invalid_mesh(format!(
                        "triangle index {} out of bounds (vertex count {})",
                        index, vertex_count
                    )));
                }
            }
        }

        // Euler: a closed triangle mesh has ~1.5 edges per triangle.
        let edge_estimate = mesh.triangle_count() * 3 / 2;
        let mut records: Vec<EdgeAdjacency> = Vec::with_capacity(edge_estimate);
        let mut lookup: HashMap<EdgeKey, usize> = HashMap::with_capacity(edge_estimate);

        for &[v1, v2, v3] in mesh.triangles() {
            Self::accumulate_edge(mesh, v1, v2, v3, &mut records, &mut lookup);
            Self::accumulate_edge(mesh, v2, v3, v1, &mut records, &mut lookup);
            Self::accumulate_edge(mesh, v3, v1, v2, &mut records, &mut lookup);
        }

        Ok(Self { records })
    }

    /// Builds tables for several independent meshes in parallel.
    ///
    /// Each mesh is processed exactly as by [`build`](Self::build); results
    /// keep the input order. The first invalid mesh fails the whole batch.
    pub fn build_batch(meshes: &[Mesh]) -> Result<Vec<Self>, MeshError> {
        meshes.par_iter().map(Self::build).collect()
    }

    /// Records one (edge, opposite vertex) occurrence.
    fn accumulate_edge(
        mesh: &Mesh,
        vertex1: u32,
        vertex2: u32,
        opposite: u32,
        records: &mut Vec<EdgeAdjacency>,
        lookup: &mut HashMap<EdgeKey, usize>,
    ) {
        let key = EdgeKey::new(mesh.vertex(vertex1), mesh.vertex(vertex2));
        match lookup.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(records.len());
                records.push(EdgeAdjacency {
                    vertex1,
                    vertex2,
                    opposite1: opposite,
                    opposite2: None,
                });
            }
            Entry::Occupied(entry) => {
                let record = &mut records[*entry.get()];
                if record.opposite2.is_none() {
                    record.opposite2 = Some(opposite);
                }
                // Third and later triangles on a non-manifold edge are
                // dropped; the outline pass only needs two representatives.
            }
        }
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in first-discovery order.
    #[inline]
    pub fn records(&self) -> &[EdgeAdjacency] {
        &self.records
    }

    /// Iterates over the records.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeAdjacency> {
        self.records.iter()
    }

    /// Exports the table as a flat i32 array for GPU upload.
    ///
    /// Format: [vertex1, vertex2, opposite1, opposite2, ...], 4 consecutive
    /// i32 per record. A missing second adjacency is encoded as -1.
    pub fn records_i32(&self) -> Vec<i32> {
        let mut result = Vec::with_capacity(self.records.len() * 4);
        for record in &self.records {
            result.push(record.vertex1 as i32);
            result.push(record.vertex2 as i32);
            result.push(record.opposite1 as i32);
            result.push(record.opposite2.map_or(NO_OPPOSITE, |v| v as i32));
        }
        result
    }
}

impl<'a> IntoIterator for &'a EdgeAdjacencyTable {
    type Item = &'a EdgeAdjacency;
    type IntoIter = std::slice::Iter<'a, EdgeAdjacency>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
