//! # Cutter Errors
//!
//! Error types surfaced by the cutter generator.

use config::constants::ConfigError;
use gem_assets::AssetError;
use gem_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating cutters and stones.
#[derive(Debug, Error)]
pub enum CutterError {
    /// A required batch input was not supplied.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// The reference stone could not be loaded.
    #[error("Asset load failed: {0}")]
    AssetLoad(#[from] AssetError),

    /// A circle is degenerate or its loft/cap could not be formed.
    #[error("Geometry construction failed: {0}")]
    GeometryConstruction(#[from] MeshError),

    /// The tessellation settings are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Failure while processing one circle of a batch.
    #[error("Circle {index}: {source}")]
    Circle {
        index: usize,
        #[source]
        source: Box<CutterError>,
    },
}

impl CutterError {
    /// Returns the underlying error, unwrapping per-circle context.
    pub fn root(&self) -> &CutterError {
        match self {
            Self::Circle { source, .. } => source.root(),
            other => other,
        }
    }

    /// Index of the failing circle, if the error came from a batch item.
    pub fn circle_index(&self) -> Option<usize> {
        match self {
            Self::Circle { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
