//! # Configuration Constants
//!
//! Centralized constants for the outline preprocessing pipeline. All geometry
//! calculations, precision values, and safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Scaling**: Coordinate quantization factors for position identity
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication.
///
/// Tolerance used when deciding that two vertices occupy the same geometric
/// position. Meshes exported with UV seams or hard normals carry several
/// vertex indices at one position; edge identity must treat them as one.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_coincide(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     let dz = v1[2] - v2[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_MERGE_EPSILON
/// }
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Scaling factor for quantizing f64 coordinates onto an i64 lattice.
///
/// Position-identity keys are built by multiplying each coordinate by this
/// factor and rounding to i64. Two positions that agree to within the lattice
/// spacing (1 / POSITION_QUANT_SCALE) produce the same key.
///
/// # Example
///
/// ```rust
/// use config::constants::POSITION_QUANT_SCALE;
///
/// fn to_lattice_coord(value: f64) -> i64 {
///     (value * POSITION_QUANT_SCALE).round() as i64
/// }
///
/// assert_eq!(to_lattice_coord(1.0), to_lattice_coord(1.0 + 1e-9));
/// ```
pub const POSITION_QUANT_SCALE: f64 = 1e6;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
