//! # Grid Primitive
//!
//! Generates an open planar grid in the XY plane.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a square planar grid mesh in the XY plane.
///
/// The grid spans [0, size] in X and Y with `subdivisions` cells per axis,
/// each cell split into two triangles. The surface is open: its perimeter
/// edges belong to exactly one triangle, which makes it the standard fixture
/// for boundary-edge handling.
///
/// # Arguments
///
/// * `size` - Edge length of the grid
/// * `subdivisions` - Number of cells per axis (at least 1)
///
/// # Returns
///
/// A mesh with (subdivisions + 1)^2 vertices and 2 * subdivisions^2
/// triangles.
///
/// # Example
///
/// ```rust
/// use outline_mesh::primitives::create_grid;
///
/// let mesh = create_grid(10.0, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_grid(size: f64, subdivisions: u32) -> Result<Mesh, MeshError> {
    if size <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Grid size must be positive: {}",
            size
        )));
    }
    if subdivisions == 0 {
        return Err(MeshError::degenerate("Grid needs at least one cell"));
    }

    let n = subdivisions;
    let vertex_rows = (n + 1) as usize;
    let mut mesh = Mesh::with_capacity(vertex_rows * vertex_rows, 2 * (n * n) as usize);

    let step = size / n as f64;
    for row in 0..=n {
        for col in 0..=n {
            mesh.add_vertex(DVec3::new(col as f64 * step, row as f64 * step, 0.0));
        }
    }

    // Two CCW triangles per cell, diagonal from the cell's lower-left corner
    for row in 0..n {
        for col in 0..n {
            let lower_left = row * (n + 1) + col;
            let lower_right = lower_left + 1;
            let upper_left = lower_left + (n + 1);
            let upper_right = upper_left + 1;

            mesh.add_triangle(lower_left, lower_right, upper_right);
            mesh.add_triangle(lower_left, upper_right, upper_left);
        }
    }

    Ok(mesh)
}
