//! # Planar Hole Capping
//!
//! Closes every boundary loop of a mesh whose points lie within a tolerance
//! of a common plane. Each loop is filled with a fan around its centroid,
//! which is exact for convex and star-shaped loops such as tessellated
//! circles.
//!
//! ## Algorithm
//!
//! 1. Collect directed edges that have no opposite partner
//! 2. Chain them into loops (a boundary vertex may start only one edge)
//! 3. Fit a plane with Newell's method and check every point against it
//! 4. Add a centroid vertex and one triangle per boundary edge, wound
//!    against the edge so the cap matches the existing orientation

use std::collections::BTreeMap;

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

/// Caps all planar holes of `mesh`.
///
/// # Arguments
///
/// * `mesh` - Mesh whose open boundaries should be closed
/// * `tolerance` - Maximum distance of a loop point from the loop's plane
///
/// # Returns
///
/// The capped mesh. A mesh without boundary is returned unchanged.
///
/// # Errors
///
/// [`MeshError::InvalidTopology`] when the boundary does not form simple
/// loops, [`MeshError::CapFailed`] when a loop is degenerate or not planar.
///
/// # Example
///
/// ```rust
/// use gem_mesh::ops::{cap_planar_holes, loft_straight};
/// use glam::DVec3;
///
/// let square = |z: f64| vec![
///     DVec3::new(1.0, 0.0, z),
///     DVec3::new(0.0, 1.0, z),
///     DVec3::new(-1.0, 0.0, z),
///     DVec3::new(0.0, -1.0, z),
/// ];
/// let open = loft_straight(&[square(1.0), square(0.0)]).unwrap();
/// let solid = cap_planar_holes(open, 0.01).unwrap();
/// assert!(solid.is_closed());
/// assert!(solid.signed_volume() > 0.0);
/// ```
pub fn cap_planar_holes(mut mesh: Mesh, tolerance: f64) -> Result<Mesh, MeshError> {
    let loops = boundary_loops(&mesh)?;

    for boundary in &loops {
        let points: Vec<DVec3> = boundary.iter().map(|&i| mesh.vertex(i)).collect();
        let centroid = points.iter().copied().sum::<DVec3>() / points.len() as f64;
        let normal = newell_normal(&points);

        if normal.length() < VERTEX_MERGE_EPSILON {
            return Err(MeshError::cap_failed(format!(
                "boundary loop of {} points encloses no area",
                points.len()
            )));
        }

        let unit = normal.normalize();
        let deviation = points
            .iter()
            .map(|p| (*p - centroid).dot(unit).abs())
            .fold(0.0_f64, f64::max);
        if deviation > tolerance {
            return Err(MeshError::cap_failed(format!(
                "boundary loop is not planar: deviation {deviation} exceeds tolerance {tolerance}"
            )));
        }

        let center = mesh.add_vertex(centroid);
        for k in 0..boundary.len() {
            let from = boundary[k];
            let to = boundary[(k + 1) % boundary.len()];
            mesh.add_triangle(to, from, center);
        }
    }

    Ok(mesh)
}

/// Traces the boundary of `mesh` into loops of vertex indices, each in the
/// direction its edges appear in the existing triangles.
fn boundary_loops(mesh: &Mesh) -> Result<Vec<Vec<u32>>, MeshError> {
    let edges = mesh.directed_edges();

    let mut next: BTreeMap<u32, u32> = BTreeMap::new();
    for (&(from, to), &count) in &edges {
        if count > 1 {
            return Err(MeshError::invalid_topology(format!(
                "edge {from}->{to} is used by {count} triangles"
            )));
        }
        if edges.contains_key(&(to, from)) {
            continue;
        }
        if next.insert(from, to).is_some() {
            return Err(MeshError::invalid_topology(format!(
                "boundary vertex {from} starts more than one open edge"
            )));
        }
    }

    let mut loops = Vec::new();
    while let Some((start, first)) = next.pop_first() {
        let mut boundary = vec![start];
        let mut current = first;
        while current != start {
            boundary.push(current);
            current = next.remove(&current).ok_or_else(|| {
                MeshError::invalid_topology(format!(
                    "boundary chain from vertex {start} does not close"
                ))
            })?;
        }
        loops.push(boundary);
    }

    Ok(loops)
}

/// Area-weighted normal of a closed polygon (Newell's method).
fn newell_normal(points: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (k, p) in points.iter().enumerate() {
        let q = points[(k + 1) % points.len()];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal
}
