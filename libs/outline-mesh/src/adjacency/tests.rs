//! # Edge Adjacency Tests
//!
//! Tests for edge deduplication, adjacency accumulation, and the flat GPU
//! export.

use std::collections::HashSet;

use super::*;
use crate::primitives::{create_cube, create_grid};

/// Independent canonical position-pair key, used to cross-check the builder's
/// internal lookup.
fn canonical_pair(mesh: &Mesh, a: u32, b: u32) -> ((i64, i64, i64), (i64, i64, i64)) {
    let quant = |v: DVec3| {
        (
            (v.x * POSITION_QUANT_SCALE).round() as i64,
            (v.y * POSITION_QUANT_SCALE).round() as i64,
            (v.z * POSITION_QUANT_SCALE).round() as i64,
        )
    };
    let pa = quant(mesh.vertex(a));
    let pb = quant(mesh.vertex(b));
    if pa <= pb {
        (pa, pb)
    } else {
        (pb, pa)
    }
}

/// Counts distinct geometric edges of a mesh without using the builder.
fn count_distinct_edges(mesh: &Mesh) -> usize {
    let mut seen = HashSet::new();
    for &[v1, v2, v3] in mesh.triangles() {
        seen.insert(canonical_pair(mesh, v1, v2));
        seen.insert(canonical_pair(mesh, v2, v3));
        seen.insert(canonical_pair(mesh, v3, v1));
    }
    seen.len()
}

fn quad_mesh() -> Mesh {
    // Two triangles sharing edge (1,2)
    Mesh::from_buffers(
        vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 1, 3, 2],
    )
    .unwrap()
}

// =============================================================================
// SCENARIO TESTS
// =============================================================================

#[test]
fn test_two_triangles_sharing_an_edge() {
    let mesh = Mesh::from_buffers(
        vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 1, 2, 3],
    )
    .unwrap();

    let table = EdgeAdjacencyTable::build(&mesh).unwrap();
    assert_eq!(table.len(), 5);

    // The shared edge carries both opposite vertices
    let shared = table
        .iter()
        .find(|r| canonical_pair(&mesh, r.vertex1, r.vertex2) == canonical_pair(&mesh, 1, 2))
        .expect("shared edge must be present");
    assert_eq!(shared.opposite1, 0);
    assert_eq!(shared.opposite2, Some(3));

    // No other record has a second adjacency
    let interior_count = table.iter().filter(|r| !r.is_boundary()).count();
    assert_eq!(interior_count, 1);
}

#[test]
fn test_single_triangle_all_boundary() {
    let mesh = Mesh::from_buffers(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 2]).unwrap();

    let table = EdgeAdjacencyTable::build(&mesh).unwrap();
    assert_eq!(table.len(), 3);
    for record in &table {
        assert!(record.is_boundary());
        assert_eq!(record.opposite2, None);
    }
}

#[test]
fn test_non_manifold_third_triangle_dropped() {
    // Three triangles all sharing edge (0,1)
    let mesh = Mesh::from_buffers(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z, DVec3::new(0.0, -1.0, 0.0)],
        vec![0, 1, 2, 0, 1, 3, 0, 1, 4],
    )
    .unwrap();

    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let shared: Vec<_> = table
        .iter()
        .filter(|r| canonical_pair(&mesh, r.vertex1, r.vertex2) == canonical_pair(&mesh, 0, 1))
        .collect();
    assert_eq!(shared.len(), 1, "non-manifold edge must not be duplicated");

    // First two triangles win, the third is dropped
    assert_eq!(shared[0].opposite1, 2);
    assert_eq!(shared[0].opposite2, Some(3));
}

#[test]
fn test_invalid_index_rejected() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::ZERO);
    mesh.add_vertex(DVec3::X);
    mesh.add_triangle(0, 1, 9); // out of range

    let err = EdgeAdjacencyTable::build(&mesh).unwrap_err();
    assert!(matches!(err, MeshError::InvalidMesh { .. }));
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

#[test]
fn test_dedup_matches_independent_count() {
    for mesh in [
        quad_mesh(),
        create_cube(DVec3::splat(4.0), true).unwrap(),
        create_grid(10.0, 3).unwrap(),
    ] {
        let table = EdgeAdjacencyTable::build(&mesh).unwrap();
        assert_eq!(table.len(), count_distinct_edges(&mesh));
    }
}

#[test]
fn test_coverage_every_triangle_edge_present() {
    let mesh = create_grid(8.0, 2).unwrap();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let recorded: HashSet<_> = table
        .iter()
        .map(|r| canonical_pair(&mesh, r.vertex1, r.vertex2))
        .collect();

    for &[v1, v2, v3] in mesh.triangles() {
        assert!(recorded.contains(&canonical_pair(&mesh, v1, v2)));
        assert!(recorded.contains(&canonical_pair(&mesh, v2, v3)));
        assert!(recorded.contains(&canonical_pair(&mesh, v3, v1)));
    }
}

#[test]
fn test_symmetry_reversed_discovery_order() {
    // Second triangle walks the shared edge as (2,1) instead of (1,2)
    let mesh = Mesh::from_buffers(
        vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::new(1.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 2, 1, 3],
    )
    .unwrap();

    let table = EdgeAdjacencyTable::build(&mesh).unwrap();
    assert_eq!(table.len(), 5);

    let shared = table
        .iter()
        .find(|r| canonical_pair(&mesh, r.vertex1, r.vertex2) == canonical_pair(&mesh, 1, 2))
        .unwrap();
    // Endpoint order is first-encountered, adjacency still accumulates
    assert_eq!((shared.vertex1, shared.vertex2), (1, 2));
    assert_eq!(shared.opposite1, 0);
    assert_eq!(shared.opposite2, Some(3));
}

#[test]
fn test_duplicate_position_vertices_share_one_edge() {
    // UV-seam shape: vertices 3 and 4 duplicate the positions of 1 and 0,
    // and the second triangle references the duplicates.
    let mesh = Mesh::from_buffers(
        vec![
            DVec3::ZERO,                  // 0
            DVec3::X,                     // 1
            DVec3::Y,                     // 2
            DVec3::X,                     // 3, same position as 1
            DVec3::ZERO,                  // 4, same position as 0
            DVec3::new(0.0, -1.0, 0.0),   // 5
        ],
        vec![0, 1, 2, 4, 3, 5],
    )
    .unwrap();

    let table = EdgeAdjacencyTable::build(&mesh).unwrap();
    // 6 triangle edges, the seam edge shared geometrically
    assert_eq!(table.len(), 5);

    let seam = table
        .iter()
        .find(|r| canonical_pair(&mesh, r.vertex1, r.vertex2) == canonical_pair(&mesh, 0, 1))
        .unwrap();
    // Indices come from the first triangle that discovered the edge
    assert_eq!((seam.vertex1, seam.vertex2), (0, 1));
    assert_eq!(seam.opposite1, 2);
    assert_eq!(seam.opposite2, Some(5));
}

#[test]
fn test_insertion_order_is_first_discovery() {
    let mesh = quad_mesh();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let endpoints: Vec<_> = table.iter().map(|r| (r.vertex1, r.vertex2)).collect();
    // Triangle (0,1,2) in rotation, then the new edges of triangle (1,3,2)
    assert_eq!(endpoints, vec![(0, 1), (1, 2), (2, 0), (1, 3), (3, 2)]);
}

#[test]
fn test_deterministic_rebuild() {
    let mesh = create_grid(6.0, 3).unwrap();
    let first = EdgeAdjacencyTable::build(&mesh).unwrap();
    let second = EdgeAdjacencyTable::build(&mesh).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// FIXTURE TESTS
// =============================================================================

#[test]
fn test_cube_is_closed_manifold() {
    let mesh = create_cube(DVec3::splat(2.0), true).unwrap();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    // 8 vertices, 12 triangles, 18 edges (Euler characteristic 2)
    assert_eq!(table.len(), 18);
    for record in &table {
        assert!(!record.is_boundary());
    }
}

#[test]
fn test_grid_perimeter_is_boundary() {
    let mesh = create_grid(10.0, 2).unwrap();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    // 2x2 grid: 6 horizontal + 6 vertical + 4 diagonal edges
    assert_eq!(table.len(), 16);

    let boundary_count = table.iter().filter(|r| r.is_boundary()).count();
    assert_eq!(boundary_count, 8, "perimeter of a 2x2 grid is 8 edges");
}

#[test]
fn test_empty_mesh_empty_table() {
    let table = EdgeAdjacencyTable::build(&Mesh::new()).unwrap();
    assert!(table.is_empty());
    assert!(table.records_i32().is_empty());
}

// =============================================================================
// EXPORT AND PERSISTENCE TESTS
// =============================================================================

#[test]
fn test_records_i32_layout() {
    let mesh = Mesh::from_buffers(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 2]).unwrap();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let flat = table.records_i32();
    assert_eq!(flat.len(), table.len() * 4);
    assert_eq!(
        flat,
        vec![
            0, 1, 2, -1, // edge (0,1) opposite 2
            1, 2, 0, -1, // edge (1,2) opposite 0
            2, 0, 1, -1, // edge (2,0) opposite 1
        ]
    );
}

#[test]
fn test_records_i32_second_adjacency() {
    let mesh = quad_mesh();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let flat = table.records_i32();
    // Record for edge (1,2) sits at slot 1 and has opposite2 = 3
    assert_eq!(&flat[4..8], &[1, 2, 0, 3]);
}

#[test]
fn test_serde_round_trip() {
    let mesh = create_cube(DVec3::splat(3.0), false).unwrap();
    let table = EdgeAdjacencyTable::build(&mesh).unwrap();

    let json = serde_json::to_string(&table).unwrap();
    let restored: EdgeAdjacencyTable = serde_json::from_str(&json).unwrap();
    assert_eq!(table, restored);
}

// =============================================================================
// BATCH TESTS
// =============================================================================

#[test]
fn test_batch_matches_sequential() {
    let meshes = vec![
        quad_mesh(),
        create_cube(DVec3::splat(2.0), true).unwrap(),
        create_grid(4.0, 2).unwrap(),
    ];

    let batch = EdgeAdjacencyTable::build_batch(&meshes).unwrap();
    assert_eq!(batch.len(), meshes.len());
    for (mesh, table) in meshes.iter().zip(&batch) {
        assert_eq!(table, &EdgeAdjacencyTable::build(mesh).unwrap());
    }
}

#[test]
fn test_batch_propagates_invalid_mesh() {
    let mut broken = Mesh::new();
    broken.add_vertex(DVec3::ZERO);
    broken.add_triangle(0, 1, 2);

    let meshes = vec![quad_mesh(), broken];
    assert!(EdgeAdjacencyTable::build_batch(&meshes).is_err());
}
