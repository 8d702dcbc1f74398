//! # Config Crate
//!
//! Centralized configuration constants for the outline preprocessing pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, POSITION_QUANT_SCALE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the quantization scale for position-identity keys
//! let cell = (1.25_f64 * POSITION_QUANT_SCALE).round() as i64;
//! assert_eq!(cell, 1_250_000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Platform-Neutral**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
