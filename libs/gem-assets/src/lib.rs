//! # Gem Assets
//!
//! Loads the unit-sized reference stone that is copied onto every circle.
//!
//! ## Architecture
//!
//! ```text
//! AssetProvider::read_bytes(name) → ModelDocument (JSON | STL) → layer lookup → ReferenceStone
//! ```
//!
//! Providers resolve assets by name only. Hosts choose where the bytes come
//! from: resources compiled into the binary ([`BundledAssets`]), memory
//! ([`InMemoryAssets`]) or a caller-supplied directory ([`DirectoryAssets`]).
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::REFERENCE_STONE_ASSET;
//! use gem_assets::{load_reference_stone, BundledAssets};
//!
//! let stone = load_reference_stone(&BundledAssets, REFERENCE_STONE_ASSET).unwrap();
//! assert_eq!(stone.layer(), "Layer1");
//! assert!(stone.mesh().is_closed());
//! ```

pub mod document;
pub mod error;
pub mod provider;
pub mod reference;

pub use document::{AssetFormat, Geometry, Layer, MeshData, ModelDocument, ModelObject};
pub use error::AssetError;
pub use provider::{AssetProvider, BundledAssets, DirectoryAssets, InMemoryAssets};
pub use reference::{load_reference_stone, ReferenceStone};
