//! # Stone Instancer
//!
//! Places a copy of the unit reference stone on a girdle circle.

use gem_assets::ReferenceStone;
use gem_mesh::Mesh;
use glam::{DMat4, DVec3};

use crate::error::CutterError;
use crate::geometry::{Circle, Plane};

/// Transform taking the unit reference stone onto `circle`.
///
/// The stone is first re-oriented from world XY onto the circle's plane
/// (which also moves its origin to the circle center), then scaled
/// uniformly about the center by the circle diameter.
///
/// # Example
///
/// ```rust
/// use gem_cutter::{stone_transform, Circle, Plane};
/// use glam::DVec3;
///
/// let circle = Circle::new(Plane::world_xy().translated(DVec3::new(1.0, 0.0, 0.0)), 2.0);
/// let m = stone_transform(&circle);
/// assert_eq!(m.transform_point3(DVec3::new(0.5, 0.0, 0.0)), DVec3::new(3.0, 0.0, 0.0));
/// ```
pub fn stone_transform(circle: &Circle) -> DMat4 {
    let orient = Plane::world_xy().transform_to(circle.plane());
    let center = circle.center();
    let scale = DMat4::from_translation(center)
        * DMat4::from_scale(DVec3::splat(circle.diameter()))
        * DMat4::from_translation(-center);
    scale * orient
}

/// Returns a transformed copy of the reference stone for `circle`.
///
/// The reference is only read; every call yields a fresh mesh.
///
/// # Errors
///
/// [`CutterError::GeometryConstruction`] when the radius is not positive.
pub fn instantiate_stone(reference: &ReferenceStone, circle: &Circle) -> Result<Mesh, CutterError> {
    circle.validate()?;

    let mut stone = reference.mesh().clone();
    stone.transform(&stone_transform(circle));
    Ok(stone)
}

#[cfg(test)]
mod tests;
