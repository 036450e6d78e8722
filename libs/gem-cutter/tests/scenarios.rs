use std::path::PathBuf;

use approx::assert_relative_eq;
use gem_assets::{AssetError, BundledAssets, DirectoryAssets, InMemoryAssets};
use gem_cutter::{
    construction_circles, cutter_tree, process, BatchInputs, BatchOptions, Circle, CutterError,
    FailurePolicy, Plane,
};
use gem_mesh::MeshError;
use glam::DVec3;

fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../gem-assets/assets")
}

#[test]
fn unit_circle_construction() {
    let circle = Circle::new(Plane::world_xy(), 1.0);
    let set = construction_circles(&circle, 5.0, 5.0);

    assert_eq!(set.top.center(), DVec3::new(0.0, 0.0, 5.0));
    assert_eq!(set.top.radius(), 1.0);
    assert_relative_eq!(set.waist.radius(), 0.43, epsilon = 1e-12);
    assert_relative_eq!(set.waist.center().z, -0.682, epsilon = 1e-12);

    let output = process(&BatchInputs::new(vec![circle]), &BundledAssets, &BatchOptions::default()).unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output.centers, vec![DVec3::ZERO]);

    let (min, max) = output.cutters[0].bounding_box();
    assert_relative_eq!(max.z, 5.0, epsilon = 1e-9);
    assert_relative_eq!(min.z, -5.682, epsilon = 1e-9);
    assert!(output.cutters[0].is_closed());
}

#[test]
fn empty_circle_list_yields_empty_output() {
    let output = process(&BatchInputs::new(vec![]), &BundledAssets, &BatchOptions::default()).unwrap();
    assert!(output.is_empty());
    assert!(output.stones.is_empty());
    assert!(output.centers.is_empty());
    assert!(output.warnings.is_empty());
}

#[test]
fn zero_radius_fails_geometry_construction() {
    let inputs = BatchInputs::new(vec![Circle::new(Plane::world_xy(), 0.0)]);
    let err = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap_err();
    assert_eq!(err.circle_index(), Some(0));
    match err.root() {
        CutterError::GeometryConstruction(MeshError::DegenerateGeometry { .. }) => {}
        other => panic!("expected degenerate geometry, got {other:?}"),
    }
}

#[test]
fn missing_height_is_reported() {
    let inputs = BatchInputs {
        height: None,
        ..BatchInputs::new(vec![Circle::new(Plane::world_xy(), 1.0)])
    };
    let err = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap_err();
    assert!(matches!(err, CutterError::MissingInput("height")));
}

#[test]
fn inputs_from_json() {
    let json = r#"{
        "circles": [
            { "plane": { "origin": [0, 0, 0], "x_axis": [1, 0, 0], "y_axis": [0, 1, 0] }, "radius": 1.0 },
            { "plane": { "origin": [5, 0, 0], "x_axis": [0, 1, 0], "y_axis": [0, 0, 1] }, "radius": 0.5 }
        ],
        "height": 2.0,
        "bottom_height": 1.0
    }"#;
    let inputs: BatchInputs = serde_json::from_str(json).unwrap();
    let output = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap();

    assert_eq!(output.len(), 2);
    let (lo, hi) = output.cutters[1].extent_along(DVec3::new(5.0, 0.0, 0.0), DVec3::X);
    assert_relative_eq!(hi, 2.0, epsilon = 1e-9);
    assert_relative_eq!(lo, -(0.341 + 1.0), epsilon = 1e-9);
}

#[test]
fn json_inputs_without_height_are_missing_input() {
    let json = r#"{ "circles": [], "bottom_height": 1.0 }"#;
    let inputs: BatchInputs = serde_json::from_str(json).unwrap();
    let err = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap_err();
    assert!(matches!(err, CutterError::MissingInput("height")));
}

#[test]
fn stones_correspond_to_circles() {
    let circles: Vec<Circle> = (1..=4)
        .map(|i| {
            Circle::from_center_normal(DVec3::new(0.0, i as f64 * 10.0, 0.0), DVec3::Z, i as f64)
                .unwrap()
        })
        .collect();
    let output = process(&BatchInputs::new(circles.clone()), &BundledAssets, &BatchOptions::default()).unwrap();

    assert_eq!(output.cutters.len(), circles.len());
    assert_eq!(output.stones.len(), circles.len());
    for (circle, stone) in circles.iter().zip(&output.stones) {
        let (min, max) = stone.bounding_box();
        assert_relative_eq!(max.x - min.x, circle.diameter(), epsilon = 1e-5 * circle.diameter());
        let mid = (min + max) * 0.5;
        assert_relative_eq!(mid.y, circle.center().y, epsilon = 1e-5 * circle.diameter());
    }
}

#[test]
fn parallel_batch_matches_sequential() {
    let circles: Vec<Circle> = (0..16)
        .map(|i| {
            let angle = i as f64 * 0.4;
            Circle::from_center_normal(
                DVec3::new(angle.cos() * 8.0, angle.sin() * 8.0, 0.0),
                DVec3::new(angle.cos(), angle.sin(), 1.0),
                0.5,
            )
            .unwrap()
        })
        .collect();
    let inputs = BatchInputs::new(circles).with_heights(1.0, 0.5);

    let sequential = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap();
    let parallel = process(
        &inputs,
        &BundledAssets,
        &BatchOptions {
            parallel: true,
            ..BatchOptions::default()
        },
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn skip_policy_keeps_tree_paths_aligned() {
    let circles = vec![
        Circle::new(Plane::world_xy(), 1.0),
        Circle::new(Plane::world_xy(), 0.0),
        Circle::new(Plane::world_xy().translated(DVec3::X * 4.0), 1.0),
    ];
    let options = BatchOptions {
        failure_policy: FailurePolicy::Skip,
        parallel: true,
        ..BatchOptions::default()
    };
    let output = process(&BatchInputs::new(circles), &BundledAssets, &options).unwrap();
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].index, 1);

    let tree = cutter_tree(&output);
    let paths: Vec<String> = tree.paths().map(ToString::to_string).collect();
    assert_eq!(paths, vec!["{0;0}", "{0;2}"]);
}

#[test]
fn reference_stone_from_directory() {
    let assets = DirectoryAssets::new(assets_dir());
    let output = process(
        &BatchInputs::new(vec![Circle::new(Plane::world_xy(), 1.0)]),
        &assets,
        &BatchOptions::default(),
    )
    .unwrap();

    let bundled = process(
        &BatchInputs::new(vec![Circle::new(Plane::world_xy(), 1.0)]),
        &BundledAssets,
        &BatchOptions::default(),
    )
    .unwrap();
    assert_eq!(output.stones, bundled.stones);
}

#[test]
fn missing_asset_fails_batch() {
    let options = BatchOptions {
        reference_asset: "missing_stone.json".into(),
        ..BatchOptions::default()
    };
    let err = process(&BatchInputs::new(vec![]), &DirectoryAssets::new(assets_dir()), &options).unwrap_err();
    assert!(matches!(err, CutterError::AssetLoad(AssetError::NotFound { .. })));
}

#[test]
fn custom_reference_stone_from_memory() {
    let mut assets = InMemoryAssets::default();
    assets.insert(
        "tetra.json",
        r#"{ "layers": [ { "name": "Default", "objects": [
            { "name": "marker", "geometry": { "type": "point", "position": [0, 0, 0] } },
            { "name": "tetra", "geometry": { "type": "mesh",
                "vertices": [[0, 0, 0], [0.5, 0, 0], [0, 0.5, 0], [0, 0, 0.5]],
                "triangles": [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]] } }
        ] } ] }"#,
    );
    let options = BatchOptions {
        reference_asset: "tetra.json".into(),
        ..BatchOptions::default()
    };
    let circle = Circle::new(Plane::world_xy().translated(DVec3::new(1.0, 1.0, 1.0)), 2.0);
    let output = process(&BatchInputs::new(vec![circle]), &assets, &options).unwrap();

    assert_eq!(output.stones[0].vertex(1), DVec3::new(3.0, 1.0, 1.0));
    assert_relative_eq!(output.stones[0].signed_volume(), 64.0 / 48.0, epsilon = 1e-9);
}
