//! # Reference Stone
//!
//! The read-only template every stone instance is copied from.

use config::constants::REFERENCE_LAYERS;
use gem_mesh::Mesh;
use tracing::debug;

use crate::document::{AssetFormat, ModelDocument};
use crate::error::AssetError;
use crate::provider::AssetProvider;

/// A unit-diameter stone shape loaded from an asset.
///
/// The girdle lies on world XY with the table toward +Z. The handle exposes
/// the mesh by shared reference only; instances are always copies.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStone {
    asset: String,
    layer: String,
    object: String,
    mesh: Mesh,
}

impl ReferenceStone {
    /// Wraps an already built mesh, e.g. one generated by the host.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_assets::ReferenceStone;
    /// use gem_mesh::Mesh;
    ///
    /// let stone = ReferenceStone::from_mesh("custom", Mesh::new());
    /// assert_eq!(stone.layer(), "Default");
    /// ```
    pub fn from_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        let name = name.into();
        Self {
            asset: name.clone(),
            layer: "Default".into(),
            object: name,
            mesh,
        }
    }

    /// Name of the asset the stone was loaded from.
    pub fn asset(&self) -> &str {
        &self.asset
    }

    /// Layer the shape was found on.
    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Name of the object inside the asset.
    pub fn object_name(&self) -> &str {
        &self.object
    }

    /// The template mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// Loads the reference stone called `name` from `provider`.
///
/// The format is chosen from the name's extension. The shape is the first
/// mesh object on `Layer1`, falling back to `Default`.
///
/// # Errors
///
/// Any [`AssetError`]: missing or unreadable asset, unknown format,
/// malformed content, no mesh on the searched layers, or an invalid mesh.
///
/// # Example
///
/// ```rust
/// use gem_assets::{load_reference_stone, AssetError, InMemoryAssets};
///
/// let assets = InMemoryAssets::default();
/// let err = load_reference_stone(&assets, "stone.json").unwrap_err();
/// assert!(matches!(err, AssetError::NotFound { .. }));
/// ```
pub fn load_reference_stone<P>(provider: &P, name: &str) -> Result<ReferenceStone, AssetError>
where
    P: AssetProvider + ?Sized,
{
    let format = AssetFormat::from_name(name).ok_or_else(|| AssetError::UnsupportedFormat {
        name: name.into(),
    })?;

    let bytes = provider.read_bytes(name)?;
    let document = match format {
        AssetFormat::Json => {
            ModelDocument::from_json(&bytes).map_err(|err| AssetError::parse(name, err))?
        }
        AssetFormat::Stl => {
            ModelDocument::from_stl(&bytes, name).map_err(|err| AssetError::parse(name, err))?
        }
    };

    let (layer, object, data) =
        document
            .find_shape(&REFERENCE_LAYERS)
            .ok_or_else(|| AssetError::NoShape {
                name: name.into(),
                layers: REFERENCE_LAYERS.join(", "),
            })?;

    let mesh = data.to_mesh().map_err(|source| AssetError::InvalidMesh {
        name: name.into(),
        source,
    })?;

    debug!(
        asset = name,
        layer = %layer.name,
        object = %object.name,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "loaded reference stone"
    );

    Ok(ReferenceStone {
        asset: name.into(),
        layer: layer.name.clone(),
        object: object.name.clone(),
        mesh,
    })
}
