//! Document decoding tests.

use super::*;

const TRIANGLE_JSON: &str = r#"{
    "layers": [
        { "name": "Layer1", "objects": [
            { "name": "marker", "geometry": { "type": "point", "position": [0, 0, 1] } },
            { "name": "tri", "geometry": {
                "type": "mesh",
                "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
                "triangles": [[0, 1, 2]]
            } }
        ] }
    ]
}"#;

/// Binary STL holding a single triangle.
fn binary_stl_triangle() -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&1u32.to_le_bytes());
    let floats: [f32; 12] = [
        0.0, 0.0, 1.0, // normal
        0.0, 0.0, 0.0, // v0
        1.0, 0.0, 0.0, // v1
        0.0, 1.0, 0.0, // v2
    ];
    for f in floats {
        bytes.extend_from_slice(&f.to_le_bytes());
    }
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes
}

#[test]
fn test_parse_json_document() {
    let doc = ModelDocument::from_json(TRIANGLE_JSON.as_bytes()).unwrap();
    assert_eq!(doc.version, 1);
    assert_eq!(doc.layers.len(), 1);
    assert_eq!(doc.layers[0].objects.len(), 2);
}

#[test]
fn test_find_shape_skips_points() {
    let doc = ModelDocument::from_json(TRIANGLE_JSON.as_bytes()).unwrap();
    let (layer, object, data) = doc.find_shape(&["Layer1"]).unwrap();
    assert_eq!(layer.name, "Layer1");
    assert_eq!(object.name, "tri");
    assert_eq!(data.triangles, vec![[0, 1, 2]]);
}

#[test]
fn test_find_shape_missing_layer() {
    let doc = ModelDocument::from_json(TRIANGLE_JSON.as_bytes()).unwrap();
    assert!(doc.find_shape(&["Default"]).is_none());
}

#[test]
fn test_malformed_json_is_error() {
    assert!(ModelDocument::from_json(b"{ \"layers\": [ { \"name\": 3 } ] }").is_err());
    assert!(ModelDocument::from_json(b"not json").is_err());
}

#[test]
fn test_mesh_data_round_trips_through_mesh() {
    let doc = ModelDocument::from_json(TRIANGLE_JSON.as_bytes()).unwrap();
    let (_, _, data) = doc.find_shape(&["Layer1"]).unwrap();
    let mesh = data.to_mesh().unwrap();
    assert_eq!(MeshData::from(&mesh), *data);
}

#[test]
fn test_mesh_data_rejects_bad_index() {
    let data = MeshData {
        vertices: vec![[0.0; 3]],
        triangles: vec![[0, 1, 2]],
    };
    assert!(matches!(data.to_mesh(), Err(MeshError::ValidationFailed { .. })));
}

#[test]
fn test_mesh_data_rejects_empty() {
    let data = MeshData {
        vertices: vec![],
        triangles: vec![],
    };
    assert!(data.to_mesh().is_err());
}

#[test]
fn test_read_binary_stl() {
    let doc = ModelDocument::from_stl(&binary_stl_triangle(), "tri.stl").unwrap();
    let (layer, object, data) = doc.find_shape(&["Layer1", "Default"]).unwrap();
    assert_eq!(layer.name, "Default");
    assert_eq!(object.name, "tri.stl");
    assert_eq!(data.vertices.len(), 3);
    assert_eq!(data.triangles.len(), 1);
}

#[test]
fn test_read_truncated_stl_fails() {
    let mut bytes = binary_stl_triangle();
    bytes.truncate(100);
    assert!(ModelDocument::from_stl(&bytes, "broken.stl").is_err());
}
