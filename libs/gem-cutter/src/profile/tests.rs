//! # Cutter Profile Tests

use super::*;
use crate::geometry::Plane;
use approx::assert_relative_eq;
use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;

fn unit_circle() -> Circle {
    Circle::new(Plane::world_xy(), 1.0)
}

#[test]
fn test_construction_circles_unit_circle() {
    let set = construction_circles(&unit_circle(), 5.0, 5.0);

    assert_eq!(set.top.center(), DVec3::new(0.0, 0.0, 5.0));
    assert_eq!(set.top.radius(), 1.0);
    assert_eq!(set.girdle, unit_circle());

    assert_relative_eq!(set.waist.radius(), 0.43, epsilon = 1e-12);
    assert_relative_eq!(set.waist.center().z, -0.682, epsilon = 1e-12);

    assert_relative_eq!(set.culet.radius(), 0.43, epsilon = 1e-12);
    assert_relative_eq!(set.culet.center().z, -5.682, epsilon = 1e-12);
}

#[test]
fn test_construction_circles_share_orientation() {
    let circle = Circle::from_center_normal(DVec3::new(3.0, -2.0, 1.0), DVec3::new(1.0, 2.0, 2.0), 0.8)
        .unwrap();
    let set = construction_circles(&circle, 2.0, 1.5);
    for c in set.as_array() {
        assert_eq!(c.plane().x_axis(), circle.plane().x_axis());
        assert_eq!(c.normal(), circle.normal());
        // Every center stays on the axis through the girdle center
        let offset = c.center() - circle.center();
        assert_relative_eq!(offset.cross(circle.normal()).length(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_cutter_extent_along_normal() {
    let circle = Circle::from_center_normal(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, -1.0, 1.0), 1.2)
        .unwrap();
    let (height, bottom_height) = (3.0, 2.5);
    let cutter = build_cutter(&circle, height, bottom_height).unwrap();

    let (lo, hi) = cutter.extent_along(circle.center(), circle.normal());
    assert_relative_eq!(hi, height, epsilon = 1e-9);
    assert_relative_eq!(lo, -(WAIST_DEPTH_RATIO * 2.4 + bottom_height), epsilon = 1e-9);
}

#[test]
fn test_cutter_is_closed_outward_solid() {
    let cutter = build_cutter(&unit_circle(), 5.0, 5.0).unwrap();
    assert!(cutter.is_closed());
    assert!(cutter.validate());
    assert!(cutter.signed_volume() > 0.0);

    let n = DEFAULT_SEGMENTS as usize;
    assert_eq!(cutter.vertex_count(), 4 * n + 2);
    assert_eq!(cutter.triangle_count(), 3 * 2 * n + 2 * n);
}

#[test]
fn test_cutter_volume_is_close_to_analytic() {
    let config = CutterConfig::new(256, 0.01).unwrap();
    let cutter = build_cutter_with(&unit_circle(), 5.0, 5.0, &config).unwrap();

    // Cylinder, conical frustum, cylinder
    let frustum = |h: f64, r1: f64, r2: f64| std::f64::consts::PI * h * (r1 * r1 + r1 * r2 + r2 * r2) / 3.0;
    let expected = frustum(5.0, 1.0, 1.0) + frustum(0.682, 1.0, 0.43) + frustum(5.0, 0.43, 0.43);
    assert_relative_eq!(cutter.signed_volume(), expected, max_relative = 1e-3);
}

#[test]
fn test_cutter_rejects_zero_radius() {
    let err = build_cutter(&Circle::new(Plane::world_xy(), 0.0), 5.0, 5.0).unwrap_err();
    assert!(matches!(
        err,
        CutterError::GeometryConstruction(MeshError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_cutter_rejects_non_finite_height() {
    let err = build_cutter(&unit_circle(), f64::NAN, 5.0).unwrap_err();
    assert!(matches!(err, CutterError::GeometryConstruction(_)));
}

#[test]
fn test_cutter_rejects_bad_config() {
    let config = CutterConfig {
        segments: 2,
        ..CutterConfig::default()
    };
    let err = build_cutter_with(&unit_circle(), 5.0, 5.0, &config).unwrap_err();
    assert!(matches!(err, CutterError::InvalidConfig(_)));
}

#[test]
fn test_cutter_respects_segment_count() {
    let config = CutterConfig::new(12, 0.01).unwrap();
    let cutter = build_cutter_with(&unit_circle(), 1.0, 1.0, &config).unwrap();
    assert_eq!(cutter.vertex_count(), 4 * 12 + 2);
    assert!(cutter.is_closed());
}

#[test]
fn test_cutter_is_deterministic() {
    let circle = Circle::from_center_normal(DVec3::ONE, DVec3::X, 0.5).unwrap();
    assert_eq!(
        build_cutter(&circle, 2.0, 1.0).unwrap(),
        build_cutter(&circle, 2.0, 1.0).unwrap()
    );
}
