//! # Configuration Constants
//!
//! Centralized constants for the cutter generator. Every literal used by the
//! profile builder, the stone instancer and the asset loader is defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Profile**: Ratios describing the cutter cross-sections
//! - **Defaults**: Host parameter defaults
//! - **Tessellation**: Ring resolution and capping tolerance
//! - **Assets**: Reference stone resource names and limits

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
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

/// Epsilon below which a vector or triangle is treated as degenerate.
///
/// Used when normalizing plane axes and when validating triangle areas.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Ratio of the waist circle radius to the girdle radius.
///
/// The waist is the cross-section between girdle and culet where the
/// pavilion of a round stone narrows.
///
/// # Example
///
/// ```rust
/// use config::constants::WAIST_RADIUS_RATIO;
///
/// let girdle_radius = 2.0;
/// assert_eq!(girdle_radius * WAIST_RADIUS_RATIO, 0.86);
/// ```
pub const WAIST_RADIUS_RATIO: f64 = 0.43;

/// Depth of the waist below the girdle, as a fraction of the girdle diameter.
///
/// # Example
///
/// ```rust
/// use config::constants::WAIST_DEPTH_RATIO;
///
/// let diameter = 2.0;
/// let depth = diameter * WAIST_DEPTH_RATIO;
/// assert!((depth - 0.682).abs() < 1e-12);
/// ```
pub const WAIST_DEPTH_RATIO: f64 = 0.341;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default distance of the cutter top above the girdle plane.
pub const DEFAULT_HEIGHT: f64 = 5.0;

/// Default distance of the culet below the waist.
pub const DEFAULT_BOTTOM_HEIGHT: f64 = 5.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of points per construction ring.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
/// assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Minimum number of points needed to close a ring into a polygon.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum deviation from a best-fit plane for a boundary loop to be capped.
///
/// Tessellated circles are exactly planar, so this only absorbs rounding.
pub const CAP_TOLERANCE: f64 = 0.01;

// =============================================================================
// ASSET CONSTANTS
// =============================================================================

/// Name of the bundled unit round stone resource.
pub const REFERENCE_STONE_ASSET: &str = "unit_round_stone.json";

/// Layers searched for the reference shape, in priority order.
///
/// # Example
///
/// ```rust
/// use config::constants::REFERENCE_LAYERS;
///
/// assert_eq!(REFERENCE_LAYERS[0], "Layer1");
/// ```
pub const REFERENCE_LAYERS: [&str; 2] = ["Layer1", "Default"];

/// Maximum size of an asset read from disk (in bytes).
///
/// 16 MB default. A unit stone is a few kilobytes.
pub const MAX_ASSET_SIZE: usize = 16 * 1024 * 1024;

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

// =============================================================================
// CUTTER CONFIG
// =============================================================================

/// Immutable snapshot of the tessellation settings shared by one batch.
///
/// # Examples
/// ```
/// use config::constants::CutterConfig;
/// let config = CutterConfig::default();
/// assert!(config.cap_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutterConfig {
    /// Points per construction ring.
    pub segments: u32,
    /// Planarity tolerance used when capping the loft ends.
    pub cap_tolerance: f64,
}

impl CutterConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// segment count and cap tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::CutterConfig;
    /// let cfg = CutterConfig::new(24, 0.01).expect("valid config");
    /// assert_eq!(cfg.segments, 24);
    /// ```
    pub fn new(segments: u32, cap_tolerance: f64) -> Result<Self, ConfigError> {
        if segments < MIN_SEGMENTS {
            return Err(ConfigError::InvalidSegments(segments));
        }
        if cap_tolerance <= 0.0 || !cap_tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(cap_tolerance));
        }
        Ok(Self {
            segments,
            cap_tolerance,
        })
    }
}

impl Default for CutterConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            cap_tolerance: CAP_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the cap tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested segment count is too small to form a ring.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "cap_tolerance must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= {MIN_SEGMENTS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
