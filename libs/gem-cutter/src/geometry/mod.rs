//! # Planes and Circles
//!
//! The two input primitives of the generator. A [`Circle`] is a [`Plane`]
//! plus a radius; its center is the plane origin and its orientation is the
//! plane normal.

use config::constants::VERTEX_MERGE_EPSILON;
use gem_mesh::MeshError;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

// =============================================================================
// PLANE
// =============================================================================

/// An oriented plane with an orthonormal frame.
///
/// `normal == x_axis.cross(y_axis)` always holds.
///
/// # Example
///
/// ```rust
/// use gem_cutter::Plane;
/// use glam::DVec3;
///
/// let plane = Plane::new(DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.5, 1.0, 0.0)).unwrap();
/// assert_eq!(plane.x_axis(), DVec3::X);
/// assert!((plane.y_axis() - DVec3::Y).length() < 1e-12);
/// assert!((plane.normal() - DVec3::Z).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaneSpec", into = "PlaneSpec")]
pub struct Plane {
    origin: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
    normal: DVec3,
}

/// Serialized form of a plane: origin and two in-plane directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PlaneSpec {
    origin: DVec3,
    x_axis: DVec3,
    y_axis: DVec3,
}

impl TryFrom<PlaneSpec> for Plane {
    type Error = MeshError;

    fn try_from(spec: PlaneSpec) -> Result<Self, Self::Error> {
        Plane::new(spec.origin, spec.x_axis, spec.y_axis)
    }
}

impl From<Plane> for PlaneSpec {
    fn from(plane: Plane) -> Self {
        Self {
            origin: plane.origin,
            x_axis: plane.x_axis,
            y_axis: plane.y_axis,
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::world_xy()
    }
}

impl Plane {
    /// The world XY plane at the origin.
    pub fn world_xy() -> Self {
        Self {
            origin: DVec3::ZERO,
            x_axis: DVec3::X,
            y_axis: DVec3::Y,
            normal: DVec3::Z,
        }
    }

    /// Builds a plane from an origin and two in-plane directions.
    ///
    /// `x_axis` is normalized; `y_axis` is made orthogonal to it.
    ///
    /// # Errors
    ///
    /// [`MeshError::DegenerateGeometry`] when an input is not finite, an axis
    /// has zero length, or the axes are parallel.
    pub fn new(origin: DVec3, x_axis: DVec3, y_axis: DVec3) -> Result<Self, MeshError> {
        if !origin.is_finite() || !x_axis.is_finite() || !y_axis.is_finite() {
            return Err(MeshError::degenerate("plane has a non-finite component"));
        }

        let x = x_axis
            .try_normalize()
            .filter(|_| x_axis.length() > VERTEX_MERGE_EPSILON)
            .ok_or_else(|| MeshError::degenerate("plane x axis has zero length"))?;
        let y_ortho = y_axis - x * y_axis.dot(x);
        if y_ortho.length() <= VERTEX_MERGE_EPSILON {
            return Err(MeshError::degenerate(
                "plane y axis is zero or parallel to the x axis",
            ));
        }
        let y = y_ortho.normalize();

        Ok(Self {
            origin,
            x_axis: x,
            y_axis: y,
            normal: x.cross(y),
        })
    }

    /// Builds a plane from an origin and a normal, choosing a stable x axis.
    ///
    /// The x axis is the world axis least aligned with the normal, projected
    /// into the plane, so `from_normal(o, Z)` matches world XY.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_cutter::Plane;
    /// use glam::DVec3;
    ///
    /// let plane = Plane::from_normal(DVec3::ZERO, DVec3::Z).unwrap();
    /// assert_eq!(plane, Plane::world_xy());
    /// ```
    pub fn from_normal(origin: DVec3, normal: DVec3) -> Result<Self, MeshError> {
        if !normal.is_finite() || normal.length() <= VERTEX_MERGE_EPSILON {
            return Err(MeshError::degenerate("plane normal has zero length"));
        }
        let n = normal.normalize();
        let abs = n.abs();
        let seed = if abs.x <= abs.y && abs.x <= abs.z {
            DVec3::X
        } else if abs.y <= abs.z {
            DVec3::Y
        } else {
            DVec3::Z
        };
        let x_axis = seed - n * seed.dot(n);
        Self::new(origin, x_axis, n.cross(x_axis))
    }

    /// Origin of the plane.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Unit x axis.
    #[inline]
    pub fn x_axis(&self) -> DVec3 {
        self.x_axis
    }

    /// Unit y axis.
    #[inline]
    pub fn y_axis(&self) -> DVec3 {
        self.y_axis
    }

    /// Unit normal (z axis).
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the plane moved by `offset`; axes are unchanged.
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            origin: self.origin + offset,
            ..*self
        }
    }

    /// Point at local coordinates `(u, v)`.
    #[inline]
    pub fn point_at(&self, u: f64, v: f64) -> DVec3 {
        self.origin + self.x_axis * u + self.y_axis * v
    }

    /// Matrix mapping local plane coordinates to world coordinates.
    pub fn frame_matrix(&self) -> DMat4 {
        DMat4::from_cols(
            self.x_axis.extend(0.0),
            self.y_axis.extend(0.0),
            self.normal.extend(0.0),
            self.origin.extend(1.0),
        )
    }

    /// Rigid transform mapping this plane onto `target` (origin to origin,
    /// axis to axis).
    pub fn transform_to(&self, target: &Plane) -> DMat4 {
        // Frames are orthonormal, so the inverse rotation is the transpose
        let rotation = glam::DMat3::from_cols(self.x_axis, self.y_axis, self.normal).transpose();
        let to_local = DMat4::from_mat3(rotation) * DMat4::from_translation(-self.origin);
        target.frame_matrix() * to_local
    }
}

// =============================================================================
// CIRCLE
// =============================================================================

/// A planar circle: plane (center and orientation) plus radius.
///
/// Construction does not validate the radius; consumers reject circles with
/// a non-positive radius when they build geometry from them.
///
/// # Example
///
/// ```rust
/// use gem_cutter::{Circle, Plane};
/// use glam::DVec3;
///
/// let circle = Circle::new(Plane::world_xy(), 1.5);
/// assert_eq!(circle.diameter(), 3.0);
/// assert_eq!(circle.translate(DVec3::Z).center(), DVec3::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    plane: Plane,
    radius: f64,
}

impl Circle {
    /// Creates a circle on `plane` centered at the plane origin.
    pub fn new(plane: Plane, radius: f64) -> Self {
        Self { plane, radius }
    }

    /// Creates a circle from a center, a normal and a radius.
    pub fn from_center_normal(center: DVec3, normal: DVec3, radius: f64) -> Result<Self, MeshError> {
        Ok(Self::new(Plane::from_normal(center, normal)?, radius))
    }

    /// The circle's plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Center point (plane origin).
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.plane.origin()
    }

    /// Unit normal of the circle's plane.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.plane.normal()
    }

    /// Radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Diameter (twice the radius).
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Checks that the radius is positive and finite.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(MeshError::degenerate(format!(
                "circle radius must be positive: {}",
                self.radius
            )))
        }
    }

    /// Returns the circle moved by `offset`.
    pub fn translate(&self, offset: DVec3) -> Self {
        Self {
            plane: self.plane.translated(offset),
            radius: self.radius,
        }
    }

    /// Returns the circle scaled by `factor` about `center`.
    ///
    /// The plane orientation is preserved; `factor` is expected positive.
    pub fn scale_about(&self, center: DVec3, factor: f64) -> Self {
        let origin = center + (self.center() - center) * factor;
        Self {
            plane: self.plane.translated(origin - self.center()),
            radius: self.radius * factor,
        }
    }

    /// Tessellates the circle into a closed ring of `segments` points.
    ///
    /// Point 0 lies on the plane x axis; points advance counter-clockwise
    /// about the normal. Circles sharing a plane orientation therefore have
    /// matching seams.
    pub fn to_polyline(&self, segments: u32) -> Vec<DVec3> {
        (0..segments)
            .map(|j| {
                let theta = TAU * j as f64 / segments as f64;
                self.plane
                    .point_at(self.radius * theta.cos(), self.radius * theta.sin())
            })
            .collect()
    }
}
