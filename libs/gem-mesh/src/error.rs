//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Planar capping failed
    #[error("Cap failed: {message}")]
    CapFailed { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a planar capping failed error.
    pub fn cap_failed(message: impl Into<String>) -> Self {
        Self::CapFailed {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
