//! # Straight Loft
//!
//! Skins an ordered sequence of closed rings with ruled (straight) sections.
//! Corresponding points of consecutive rings are joined by straight lines;
//! there is no smoothing across rings.
//!
//! ## Orientation
//!
//! Faces point outward when every ring winds counter-clockwise about the
//! direction pointing from the last ring toward the first. The first and
//! last rings stay open; see [`crate::ops::cap_planar_holes`].

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Lofts a skin through `rings` using straight sections.
///
/// # Arguments
///
/// * `rings` - At least two rings, each with the same number (>= 3) of points.
///   Point `j` of one ring is joined to point `j` of the next.
///
/// # Returns
///
/// An open mesh sharing one vertex per ring point.
///
/// # Example
///
/// ```rust
/// use gem_mesh::ops::loft_straight;
/// use glam::DVec3;
///
/// let square = |z: f64| vec![
///     DVec3::new(1.0, 0.0, z),
///     DVec3::new(0.0, 1.0, z),
///     DVec3::new(-1.0, 0.0, z),
///     DVec3::new(0.0, -1.0, z),
/// ];
/// let mesh = loft_straight(&[square(1.0), square(0.0)]).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn loft_straight(rings: &[Vec<DVec3>]) -> Result<Mesh, MeshError> {
    if rings.len() < 2 {
        return Err(MeshError::degenerate(format!(
            "Loft needs at least 2 rings: {}",
            rings.len()
        )));
    }

    let n = rings[0].len();
    if n < 3 {
        return Err(MeshError::degenerate(format!(
            "Loft rings need at least 3 points: {}",
            n
        )));
    }

    if let Some(index) = rings.iter().position(|ring| ring.len() != n) {
        return Err(MeshError::invalid_topology(format!(
            "Loft ring {} has {} points, expected {}",
            index,
            rings[index].len(),
            n
        )));
    }

    if rings.iter().flatten().any(|p| !p.is_finite()) {
        return Err(MeshError::degenerate("Loft ring has a non-finite point"));
    }

    let sections = rings.len() - 1;
    let mut mesh = Mesh::with_capacity(n * rings.len(), n * sections * 2);

    // One shared vertex per ring point
    let indices: Vec<Vec<u32>> = rings
        .iter()
        .map(|ring| ring.iter().map(|p| mesh.add_vertex(*p)).collect())
        .collect();

    // Quads between ring k (upper) and ring k + 1 (lower)
    for pair in indices.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..n {
            let j_next = (j + 1) % n;

            let b0 = lower[j];
            let b1 = lower[j_next];
            let t0 = upper[j];
            let t1 = upper[j_next];

            mesh.add_triangle(b0, b1, t1);
            mesh.add_triangle(b0, t1, t0);
        }
    }

    Ok(mesh)
}
