//! # Asset Errors
//!
//! Error types for reference asset lookup and decoding.

use gem_mesh::MeshError;
use thiserror::Error;

/// Errors raised while locating or decoding a reference asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The provider has no asset with this name.
    #[error("asset not found: {name}")]
    NotFound { name: String },

    /// The name cannot be resolved safely by the provider.
    #[error("invalid asset name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The asset exceeds the configured size limit.
    #[error("asset {name} is {size} bytes (max: {max})")]
    TooLarge { name: String, size: u64, max: usize },

    /// Reading the asset failed.
    #[error("failed to read asset {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The name does not carry a known model extension.
    #[error("unsupported asset format: {name}")]
    UnsupportedFormat { name: String },

    /// The bytes could not be decoded as a model.
    #[error("malformed asset {name}: {message}")]
    Parse { name: String, message: String },

    /// None of the searched layers holds a mesh shape.
    #[error("asset {name} has no shape on layers [{layers}]")]
    NoShape { name: String, layers: String },

    /// The shape was found but its mesh is unusable.
    #[error("asset {name} contains an invalid mesh: {source}")]
    InvalidMesh {
        name: String,
        #[source]
        source: MeshError,
    },
}

impl AssetError {
    /// Creates a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a parse error.
    pub fn parse(name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
