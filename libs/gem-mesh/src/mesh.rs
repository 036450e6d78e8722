//! # Mesh Data Structure
//!
//! Core mesh representation with vertices and triangles, plus the edge
//! queries used to decide whether a mesh bounds a solid.

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::{DMat4, DVec3};

use crate::error::MeshError;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. A mesh whose edges all pair up with
/// an opposite edge is treated as a closed solid.
///
/// # Example
///
/// ```rust
/// use gem_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(!mesh.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from raw buffers, rejecting out-of-range indices and
    /// non-finite coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.triangle_count(), 1);
    ///
    /// assert!(Mesh::from_parts(vec![DVec3::ZERO], vec![[0, 1, 2]]).is_err());
    /// ```
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::validation_failed(format!(
                "vertex {index} has a non-finite coordinate"
            )));
        }

        let vertex_count = vertices.len();
        for (index, tri) in triangles.iter().enumerate() {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return Err(MeshError::validation_failed(format!(
                    "triangle {index} references a vertex outside 0..{vertex_count}: {tri:?}"
                )));
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Returns the (min, max) signed distances of the vertices along `axis`,
    /// measured from `origin`.
    ///
    /// `axis` is expected to be unit length.
    pub fn extent_along(&self, origin: DVec3, axis: DVec3) -> (f64, f64) {
        if self.vertices.is_empty() {
            return (0.0, 0.0);
        }

        self.vertices
            .iter()
            .map(|v| (*v - origin).dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            })
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Mirroring transforms flip the winding
        if matrix.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex(DVec3::ZERO);
    /// mesh.translate(DVec3::new(10.0, 0.0, 0.0));
    /// assert_eq!(mesh.vertex(0), DVec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Counts each directed edge `(from, to)` over all triangles.
    pub(crate) fn directed_edges(&self) -> HashMap<(u32, u32), usize> {
        let mut edges = HashMap::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            for k in 0..3 {
                *edges.entry((tri[k], tri[(k + 1) % 3])).or_insert(0) += 1;
            }
        }
        edges
    }

    /// Returns the directed edges that have no opposite partner, in the
    /// direction they appear in their triangle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gem_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]).unwrap();
    /// assert_eq!(mesh.boundary_edges().len(), 3);
    /// ```
    pub fn boundary_edges(&self) -> Vec<(u32, u32)> {
        let edges = self.directed_edges();
        let mut boundary: Vec<(u32, u32)> = edges
            .keys()
            .filter(|&&(from, to)| !edges.contains_key(&(to, from)))
            .copied()
            .collect();
        boundary.sort_unstable();
        boundary
    }

    /// Returns true if every edge is used exactly once in each direction,
    /// i.e. the mesh is watertight and consistently oriented.
    pub fn is_closed(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let edges = self.directed_edges();
        edges
            .iter()
            .all(|(&(from, to), &count)| count == 1 && edges.get(&(to, from)) == Some(&1))
    }

    /// Signed enclosed volume (divergence theorem).
    ///
    /// Positive for a closed mesh whose triangles face outward; meaningless
    /// for open meshes.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }
}
