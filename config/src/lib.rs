//! # Config Crate
//!
//! Centralized configuration constants for the gemstone cutter generator.
//! Profile ratios, default heights, tessellation and capping tolerances and
//! the reference asset names are defined here so the mesh, asset and cutter
//! crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_HEIGHT, WAIST_RADIUS_RATIO, EPSILON};
//!
//! let radius = 1.0;
//! let waist_radius = radius * WAIST_RADIUS_RATIO;
//! assert!((waist_radius - 0.43).abs() < EPSILON);
//! assert_eq!(DEFAULT_HEIGHT, 5.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Defaults**: Heights and asset layers match what the modeling host expects
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
