//! # Config Crate
//!
//! Centralized configuration constants for the honeycomb mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SCALE, MIN_GRID_ROWS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON
//! assert!(value.abs() < EPSILON);
//!
//! // Parameter defaults match the original add-on's property panel
//! assert_eq!(DEFAULT_SCALE, 1.0);
//! assert!(MIN_GRID_ROWS >= 2);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Pure constants, no external crates
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
