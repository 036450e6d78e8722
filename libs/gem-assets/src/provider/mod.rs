//! Asset providers used by the reference stone loader.
//!
//! Every provider answers the same question: "give me the bytes of the asset
//! called `name`". Where the bytes live is the provider's business, so the
//! loader never hard-codes a filesystem path.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use config::constants::{MAX_ASSET_SIZE, REFERENCE_STONE_ASSET};

use crate::error::AssetError;

/// Lookup-by-name access to model assets.
///
/// # Examples
/// ```
/// use gem_assets::{AssetProvider, InMemoryAssets};
/// let assets = InMemoryAssets::default();
/// assert!(assets.read_bytes("stone.json").is_err());
/// ```
pub trait AssetProvider {
    /// Reads an entire asset into memory.
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

impl<P: AssetProvider + ?Sized> AssetProvider for &P {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        (**self).read_bytes(name)
    }
}

/// Resources compiled into the binary.
const BUNDLED: &[(&str, &[u8])] = &[(
    REFERENCE_STONE_ASSET,
    include_bytes!("../../assets/unit_round_stone.json"),
)];

/// Provider serving the resources bundled with this crate.
///
/// # Examples
/// ```
/// use config::constants::REFERENCE_STONE_ASSET;
/// use gem_assets::{AssetProvider, BundledAssets};
/// let bytes = BundledAssets.read_bytes(REFERENCE_STONE_ASSET).unwrap();
/// assert!(!bytes.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledAssets;

impl BundledAssets {
    /// Names of all bundled resources.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl AssetProvider for BundledAssets {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| AssetError::not_found(name))
    }
}

/// In-memory assets intended for tests and embedding hosts.
///
/// # Examples
/// ```
/// use gem_assets::{AssetProvider, InMemoryAssets};
/// let mut assets = InMemoryAssets::default();
/// assets.insert("stone.json", b"{}".to_vec());
/// assert_eq!(assets.read_bytes("stone.json").unwrap(), b"{}");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssets {
    assets: HashMap<String, Vec<u8>>,
}

impl InMemoryAssets {
    /// Inserts or replaces an asset.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), bytes.into());
    }
}

impl AssetProvider for InMemoryAssets {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::not_found(name))
    }
}

/// Assets stored as files below a caller-supplied root directory.
///
/// Names are relative paths; absolute paths and `..` are rejected so a name
/// can never escape the root.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
    max_size: usize,
}

impl DirectoryAssets {
    /// Creates a provider rooted at `root` with the default size limit.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_size: MAX_ASSET_SIZE,
        }
    }

    /// Overrides the maximum accepted asset size in bytes.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        let relative = Path::new(name);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if name.is_empty() || !is_plain {
            return Err(AssetError::InvalidName {
                name: name.into(),
                reason: "expected a relative path without '..'".into(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl AssetProvider for DirectoryAssets {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(name)?;
        let io_error = |source: std::io::Error| match source.kind() {
            ErrorKind::NotFound => AssetError::not_found(name),
            _ => AssetError::Io {
                name: name.into(),
                source,
            },
        };

        let size = std::fs::metadata(&path).map_err(io_error)?.len();
        if size > self.max_size as u64 {
            return Err(AssetError::TooLarge {
                name: name.into(),
                size,
                max: self.max_size,
            });
        }

        std::fs::read(&path).map_err(io_error)
    }
}
