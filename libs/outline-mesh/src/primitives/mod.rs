//! # Primitives
//!
//! Deterministic test geometry (cube, planar grid) for the adjacency
//! pipeline.

pub mod cube;
pub mod grid;

pub use cube::create_cube;
pub use grid::create_grid;
