//! # Cutter Profile
//!
//! Builds the seat cutter for one girdle circle.
//!
//! ## Construction
//!
//! ```text
//!   top     ──────────   +height along the normal, girdle radius
//!           │        │
//!   girdle  ──────────   input circle
//!            \      /
//!   waist     ──────     0.43 × radius, 0.341 × diameter below the girdle
//!             │    │
//!   culet     ──────     bottom_height below the waist
//! ```
//!
//! The four circles are tessellated with the same seam, lofted with straight
//! sections from top to culet and capped at both ends.

use config::constants::{CutterConfig, WAIST_DEPTH_RATIO, WAIST_RADIUS_RATIO};
use gem_mesh::{cap_planar_holes, loft_straight, Mesh, MeshError};
use tracing::debug;

use crate::error::CutterError;
use crate::geometry::Circle;

/// The four cross-sections of a cutter, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionCircles {
    pub top: Circle,
    pub girdle: Circle,
    pub waist: Circle,
    pub culet: Circle,
}

impl ConstructionCircles {
    /// The circles in loft order.
    pub fn as_array(&self) -> [Circle; 4] {
        [self.top, self.girdle, self.waist, self.culet]
    }
}

/// Derives the construction circles of a cutter.
///
/// No validation is done here; see [`build_cutter`].
///
/// # Example
///
/// ```rust
/// use gem_cutter::{construction_circles, Circle, Plane};
/// use glam::DVec3;
///
/// let set = construction_circles(&Circle::new(Plane::world_xy(), 1.0), 5.0, 5.0);
/// assert_eq!(set.top.center(), DVec3::new(0.0, 0.0, 5.0));
/// assert!((set.waist.radius() - 0.43).abs() < 1e-12);
/// ```
pub fn construction_circles(circle: &Circle, height: f64, bottom_height: f64) -> ConstructionCircles {
    let normal = circle.normal();

    let top = circle.translate(normal * height);
    let waist = circle
        .scale_about(circle.center(), WAIST_RADIUS_RATIO)
        .translate(-normal * (WAIST_DEPTH_RATIO * circle.diameter()));
    let culet = waist.translate(-normal * bottom_height);

    ConstructionCircles {
        top,
        girdle: *circle,
        waist,
        culet,
    }
}

/// Builds a closed cutter solid with the default tessellation.
///
/// # Errors
///
/// [`CutterError::GeometryConstruction`] when the radius is not positive,
/// a height is not finite, or lofting/capping fails.
///
/// # Example
///
/// ```rust
/// use gem_cutter::{build_cutter, Circle, Plane};
///
/// let cutter = build_cutter(&Circle::new(Plane::world_xy(), 1.0), 5.0, 5.0).unwrap();
/// assert!(cutter.is_closed());
/// ```
pub fn build_cutter(circle: &Circle, height: f64, bottom_height: f64) -> Result<Mesh, CutterError> {
    build_cutter_with(circle, height, bottom_height, &CutterConfig::default())
}

/// Builds a closed cutter solid using `config` for ring resolution and cap
/// tolerance.
pub fn build_cutter_with(
    circle: &Circle,
    height: f64,
    bottom_height: f64,
    config: &CutterConfig,
) -> Result<Mesh, CutterError> {
    let config = CutterConfig::new(config.segments, config.cap_tolerance)?;
    circle.validate()?;
    if !height.is_finite() || !bottom_height.is_finite() {
        return Err(MeshError::degenerate(format!(
            "heights must be finite: height={height}, bottom_height={bottom_height}"
        ))
        .into());
    }

    let rings: Vec<_> = construction_circles(circle, height, bottom_height)
        .as_array()
        .iter()
        .map(|c| c.to_polyline(config.segments))
        .collect();

    let open = loft_straight(&rings)?;
    let solid = cap_planar_holes(open, config.cap_tolerance)?;
    if !solid.is_closed() {
        return Err(MeshError::validation_failed("capped cutter is not closed").into());
    }

    debug!(
        center = ?circle.center(),
        radius = circle.radius(),
        triangles = solid.triangle_count(),
        "built cutter"
    );

    Ok(solid)
}

#[cfg(test)]
mod tests;
