//! # Stone Instancer Tests

use super::*;
use approx::assert_relative_eq;
use config::constants::REFERENCE_STONE_ASSET;
use gem_assets::{load_reference_stone, BundledAssets};

fn reference() -> ReferenceStone {
    load_reference_stone(&BundledAssets, REFERENCE_STONE_ASSET).unwrap()
}

#[test]
fn test_stone_on_world_xy_is_scaled_by_diameter() {
    let stone = reference();
    let instance = instantiate_stone(&stone, &Circle::new(Plane::world_xy(), 1.5)).unwrap();

    let (min, max) = instance.bounding_box();
    assert_relative_eq!(max.x - min.x, 3.0, epsilon = 1e-5);
    assert_relative_eq!(max.y - min.y, 3.0, epsilon = 1e-5);
    assert_relative_eq!(
        instance.signed_volume(),
        stone.mesh().signed_volume() * 27.0,
        max_relative = 1e-9
    );
}

#[test]
fn test_stone_follows_tilted_circle() {
    let stone = reference();
    let circle = Circle::from_center_normal(DVec3::new(2.0, -1.0, 4.0), DVec3::new(1.0, 0.0, 1.0), 0.5)
        .unwrap();
    let instance = instantiate_stone(&stone, &circle).unwrap();

    // Table above the girdle along the circle normal, culet below
    let (ref_lo, ref_hi) = stone.mesh().extent_along(DVec3::ZERO, DVec3::Z);
    let (lo, hi) = instance.extent_along(circle.center(), circle.normal());
    assert_relative_eq!(hi, ref_hi, epsilon = 1e-9);
    assert_relative_eq!(lo, ref_lo, epsilon = 1e-9);

    // Girdle outline lands on the circle
    let widest = instance
        .vertices()
        .iter()
        .map(|v| {
            let d = *v - circle.center();
            (d - circle.normal() * d.dot(circle.normal())).length()
        })
        .fold(0.0_f64, f64::max);
    assert_relative_eq!(widest, circle.radius(), epsilon = 1e-5);
    assert!(instance.is_closed());
    assert!(instance.signed_volume() > 0.0);
}

#[test]
fn test_stone_transform_maps_origin_to_center() {
    let circle = Circle::from_center_normal(DVec3::new(-3.0, 2.0, 0.5), DVec3::Y, 4.0).unwrap();
    let m = stone_transform(&circle);
    let center = m.transform_point3(DVec3::ZERO);
    assert_relative_eq!((center - circle.center()).length(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(m.transform_vector3(DVec3::Z).length(), 8.0, epsilon = 1e-12);
}

#[test]
fn test_instantiate_is_deterministic() {
    let stone = reference();
    let circle = Circle::from_center_normal(DVec3::ONE, DVec3::new(0.2, 0.3, 0.9), 0.7).unwrap();
    assert_eq!(
        instantiate_stone(&stone, &circle).unwrap(),
        instantiate_stone(&stone, &circle).unwrap()
    );
}

#[test]
fn test_reference_is_not_mutated() {
    let stone = reference();
    let snapshot = stone.mesh().clone();
    for radius in [0.5, 1.0, 3.0] {
        let circle = Circle::from_center_normal(DVec3::splat(radius), DVec3::X, radius).unwrap();
        instantiate_stone(&stone, &circle).unwrap();
    }
    assert_eq!(stone.mesh(), &snapshot);
}

#[test]
fn test_zero_radius_is_rejected() {
    let err = instantiate_stone(&reference(), &Circle::new(Plane::world_xy(), 0.0)).unwrap_err();
    assert!(matches!(err, CutterError::GeometryConstruction(_)));
}
