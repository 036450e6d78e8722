//! # Output Tree
//!
//! Branch-structured view of batch output for hosts that publish data as a
//! tree of paths (`{0;0}`, `{0;1}`, ...). The core output stays flat; this
//! module only regroups it.

use std::collections::BTreeMap;
use std::fmt;

use gem_mesh::Mesh;

use crate::batch::BatchOutput;

/// A branch address such as `{0;3}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataPath(Vec<usize>);

impl DataPath {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, index) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ";")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}

/// Items grouped into branches, ordered by path.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTree<T> {
    branches: BTreeMap<DataPath, Vec<T>>,
}

impl<T> Default for DataTree<T> {
    fn default() -> Self {
        Self {
            branches: BTreeMap::new(),
        }
    }
}

impl<T> DataTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the branch at `path`, creating it if needed.
    pub fn add(&mut self, path: DataPath, item: T) {
        self.branches.entry(path).or_default().push(item);
    }

    pub fn branch(&self, path: &DataPath) -> Option<&[T]> {
        self.branches.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &DataPath> {
        self.branches.keys()
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    pub fn item_count(&self) -> usize {
        self.branches.values().map(Vec::len).sum()
    }

    /// All items in path order.
    pub fn flatten(self) -> Vec<T> {
        self.branches.into_values().flatten().collect()
    }
}

/// Places each cutter on its own branch `{0;i}`, where `i` is the index of
/// the circle it was built from.
///
/// # Example
///
/// ```rust
/// use gem_assets::BundledAssets;
/// use gem_cutter::{cutter_tree, process, BatchInputs, BatchOptions, Circle, Plane};
///
/// let inputs = BatchInputs::new(vec![Circle::new(Plane::world_xy(), 1.0)]);
/// let output = process(&inputs, &BundledAssets, &BatchOptions::default()).unwrap();
/// let tree = cutter_tree(&output);
/// assert_eq!(tree.paths().next().unwrap().to_string(), "{0;0}");
/// ```
pub fn cutter_tree(output: &BatchOutput) -> DataTree<Mesh> {
    let mut tree = DataTree::new();
    for (cutter, &index) in output.cutters.iter().zip(&output.source_indices) {
        tree.add(DataPath::new([0, index]), cutter.clone());
    }
    tree
}
