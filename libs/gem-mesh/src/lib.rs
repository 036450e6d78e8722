//! # Gem Mesh
//!
//! Triangle meshes for gemstone seat cutters and stone instances.
//!
//! ## Architecture
//!
//! ```text
//! rings (Vec<DVec3>) → loft_straight → open Mesh → cap_planar_holes → closed Mesh
//! ```
//!
//! ## Algorithms
//!
//! - **Loft**: Ruled quads between consecutive rings, split into triangles
//! - **Cap**: Boundary loop tracing, planarity check, centroid fan
//! - **Checks**: Edge pairing (closedness) and signed volume
//!
//! ## Usage
//!
//! ```rust
//! use gem_mesh::ops::{cap_planar_holes, loft_straight};
//! use glam::DVec3;
//!
//! let ring = |z: f64| -> Vec<DVec3> {
//!     (0..16)
//!         .map(|i| {
//!             let theta = std::f64::consts::TAU * i as f64 / 16.0;
//!             DVec3::new(theta.cos(), theta.sin(), z)
//!         })
//!         .collect()
//! };
//! let open = loft_straight(&[ring(1.0), ring(0.0)]).unwrap();
//! let solid = cap_planar_holes(open, 0.01).unwrap();
//! assert!(solid.is_closed());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{cap_planar_holes, loft_straight};
