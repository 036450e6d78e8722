//! # Gem Cutter
//!
//! Seat cutters and stone instances for round gemstones in a jewelry model.
//!
//! For every girdle circle the crate builds:
//!
//! - a closed cutter solid (top, girdle, waist and culet circles lofted with
//!   straight sections and capped at both ends)
//! - a copy of the unit reference stone oriented onto the circle and scaled
//!   to its diameter
//! - the circle center
//!
//! ## Architecture
//!
//! ```text
//! geometry (Plane, Circle)
//!     ├─► profile (construction_circles, build_cutter) ─► gem-mesh loft + cap
//!     ├─► stone (stone_transform, instantiate_stone)   ◄─ gem-assets ReferenceStone
//!     └─► batch (process)                              ─► tree (cutter_tree)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gem_assets::BundledAssets;
//! use gem_cutter::{process, BatchInputs, BatchOptions, Circle, Plane};
//! use glam::DVec3;
//!
//! let circles = vec![
//!     Circle::new(Plane::world_xy(), 1.0),
//!     Circle::from_center_normal(DVec3::new(4.0, 0.0, 0.0), DVec3::X, 0.5).unwrap(),
//! ];
//! let inputs = BatchInputs::new(circles).with_heights(3.0, 2.0);
//! let output = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap();
//!
//! assert_eq!(output.cutters.len(), 2);
//! assert!(output.cutters.iter().all(|c| c.is_closed()));
//! assert_eq!(output.centers[1], DVec3::new(4.0, 0.0, 0.0));
//! ```
//!
//! Logging goes through `tracing`; install a subscriber in the host to see it.

pub mod batch;
pub mod error;
pub mod geometry;
pub mod profile;
pub mod stone;
pub mod tree;

pub use batch::{
    process, process_with_reference, BatchInputs, BatchOptions, BatchOutput, FailurePolicy,
    ItemWarning,
};
pub use error::CutterError;
pub use geometry::{Circle, Plane};
pub use profile::{build_cutter, build_cutter_with, construction_circles, ConstructionCircles};
pub use stone::{instantiate_stone, stone_transform};
pub use tree::{cutter_tree, DataPath, DataTree};
