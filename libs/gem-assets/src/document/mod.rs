//! # Model Documents
//!
//! A model document is a list of named layers, each holding named objects.
//! The JSON form is the native asset format; STL files are read as a single
//! unnamed shape on the `Default` layer.
//!
//! ```json
//! {
//!   "version": 1,
//!   "layers": [
//!     { "name": "Layer1", "objects": [
//!       { "name": "unitRoundStone",
//!         "geometry": { "type": "mesh", "vertices": [[0,0,0], ...], "triangles": [[0,1,2], ...] } }
//!     ] }
//!   ]
//! }
//! ```

use std::io::Cursor;

use gem_mesh::{Mesh, MeshError};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Encodings understood by the loader, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    /// Model document serialized as JSON (`.json`)
    Json,
    /// Binary or ASCII STL (`.stl`)
    Stl,
}

impl AssetFormat {
    /// Detects the format from an asset name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_assets::AssetFormat;
    ///
    /// assert_eq!(AssetFormat::from_name("stones/round.JSON"), Some(AssetFormat::Json));
    /// assert_eq!(AssetFormat::from_name("round.stl"), Some(AssetFormat::Stl));
    /// assert_eq!(AssetFormat::from_name("round.3dm"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }
}

/// A layered collection of named objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Format revision
    #[serde(default = "default_version")]
    pub version: u32,
    /// Layers in file order
    pub layers: Vec<Layer>,
}

fn default_version() -> u32 {
    1
}

/// A named layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<ModelObject>,
}

/// A named object with its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelObject {
    pub name: String,
    pub geometry: Geometry,
}

/// Object geometry. Only meshes are usable as reference shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Indexed triangle mesh
    Mesh(MeshData),
    /// Annotation point
    Point { position: [f64; 3] },
}

/// Serialized mesh buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<[f64; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshData {
    /// Converts the buffers into a validated [`Mesh`].
    pub fn to_mesh(&self) -> Result<Mesh, MeshError> {
        if self.triangles.is_empty() {
            return Err(MeshError::validation_failed("mesh has no triangles"));
        }
        let vertices = self.vertices.iter().map(|v| DVec3::from_array(*v)).collect();
        Mesh::from_parts(vertices, self.triangles.clone())
    }
}

impl From<&Mesh> for MeshData {
    fn from(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices().iter().map(|v| v.to_array()).collect(),
            triangles: mesh.triangles().to_vec(),
        }
    }
}

impl ModelDocument {
    /// Parses a JSON model document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Reads an STL file as one mesh object named `object_name` on the
    /// `Default` layer. Coincident STL corners are merged into shared
    /// vertices by the reader.
    pub fn from_stl(bytes: &[u8], object_name: &str) -> std::io::Result<Self> {
        let stl = stl_io::read_stl(&mut Cursor::new(bytes))?;
        let vertices = stl
            .vertices
            .iter()
            .map(|v| [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])])
            .collect();
        let triangles = stl
            .faces
            .iter()
            .map(|face| face.vertices.map(|i| i as u32))
            .collect();

        Ok(Self {
            version: default_version(),
            layers: vec![Layer {
                name: "Default".into(),
                objects: vec![ModelObject {
                    name: object_name.into(),
                    geometry: Geometry::Mesh(MeshData {
                        vertices,
                        triangles,
                    }),
                }],
            }],
        })
    }

    /// Returns the first layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Finds the first mesh object on the first of `layers` that has one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_assets::{Geometry, Layer, MeshData, ModelDocument, ModelObject};
    ///
    /// let doc = ModelDocument {
    ///     version: 1,
    ///     layers: vec![Layer {
    ///         name: "Default".into(),
    ///         objects: vec![ModelObject {
    ///             name: "stone".into(),
    ///             geometry: Geometry::Mesh(MeshData { vertices: vec![], triangles: vec![] }),
    ///         }],
    ///     }],
    /// };
    /// let (layer, object, _) = doc.find_shape(&["Layer1", "Default"]).unwrap();
    /// assert_eq!((layer.name.as_str(), object.name.as_str()), ("Default", "stone"));
    /// ```
    pub fn find_shape(&self, layers: &[&str]) -> Option<(&Layer, &ModelObject, &MeshData)> {
        layers.iter().find_map(|name| {
            let layer = self.layer(name)?;
            layer.objects.iter().find_map(|object| match &object.geometry {
                Geometry::Mesh(data) => Some((layer, object, data)),
                Geometry::Point { .. } => None,
            })
        })
    }
}

#[cfg(test)]
mod tests;
