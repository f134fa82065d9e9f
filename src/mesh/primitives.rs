//! Analytic primitive meshes with triangle and edge index lists.

use std::f32::consts::PI;

use glam::Vec3;

use crate::mesh::{MeshData, Vertex};

/// Cube corner vertices. Corner normals point outward along the diagonals
/// (1/sqrt(3) per component); colors alternate red/blue per the +X/-X side.
pub const CUBE_VERTICES: &[Vertex] = &[
    Vertex::new([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], [0.577, 0.577, 0.577]),
    Vertex::new([-1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [-0.577, 0.577, 0.577]),
    Vertex::new([1.0, -1.0, 1.0], [1.0, 0.0, 0.0], [0.577, -0.577, 0.577]),
    Vertex::new([-1.0, -1.0, 1.0], [0.0, 0.0, 1.0], [-0.577, -0.577, 0.577]),
    Vertex::new([1.0, 1.0, -1.0], [1.0, 0.0, 0.0], [0.577, 0.577, -0.577]),
    Vertex::new([-1.0, 1.0, -1.0], [0.0, 0.0, 1.0], [-0.577, 0.577, -0.577]),
    Vertex::new([1.0, -1.0, -1.0], [1.0, 0.0, 0.0], [0.577, -0.577, -0.577]),
    Vertex::new([-1.0, -1.0, -1.0], [0.0, 0.0, 1.0], [-0.577, -0.577, -0.577]),
];

/// Cube triangle indices, counter-clockwise winding.
#[rustfmt::skip]
pub const CUBE_INDICES: &[u16] = &[
    // Front
    0, 1, 3,
    0, 3, 2,
    // Back
    5, 4, 6,
    5, 6, 7,
    // Left
    1, 5, 7,
    1, 7, 3,
    // Right
    4, 0, 2,
    4, 2, 6,
    // Top
    4, 5, 1,
    4, 1, 0,
    // Bottom
    7, 6, 2,
    7, 2, 3,
];

/// Cube edge line-list indices for the outline pass.
#[rustfmt::skip]
pub const CUBE_EDGES: &[u16] = &[
    0, 1,
    1, 3,
    3, 2,
    2, 0,

    4, 5,
    5, 7,
    7, 6,
    6, 4,

    0, 4,
    1, 5,
    2, 6,
    3, 7,
];

/// Cube mesh data (side length 2, centered at the origin).
#[must_use]
pub fn cube() -> MeshData {
    MeshData {
        vertices: CUBE_VERTICES.to_vec(),
        indices: CUBE_INDICES.to_vec(),
        edge_indices: CUBE_EDGES.to_vec(),
    }
}

/// Regular tetrahedron inscribed in the unit sphere, vertex normals
/// accumulated from the adjacent face normals.
#[must_use]
pub fn tetrahedron() -> MeshData {
    const N_VERTICES: usize = 4;
    const N_INDICES: usize = 12;

    #[rustfmt::skip]
    let indices: [u16; N_INDICES] = [
        0, 1, 2,
        0, 2, 3,
        2, 1, 3,
        1, 0, 3,
    ];

    #[rustfmt::skip]
    let edge_indices: [u16; N_INDICES] = [
        0, 1,
        1, 2,
        2, 0,
        0, 3,
        1, 3,
        2, 3,
    ];

    let a = (8.0_f32 / 9.0).sqrt();
    let b = -1.0 / (2.0 * 6.0_f32.sqrt());
    let c = -(2.0_f32 / 9.0).sqrt();
    let d = (2.0_f32 / 3.0).sqrt();
    let e = (3.0_f32 / 8.0).sqrt();

    let positions: [Vec3; N_VERTICES] = [
        // Base vertex aligned with the y-axis
        Vec3::new(0.0, a, b),
        // Remaining base vertices
        Vec3::new(d, c, b),
        Vec3::new(-d, c, b),
        // Apex aligned with the z-axis
        Vec3::new(0.0, 0.0, e),
    ];

    // Vertex normal = normalized sum of adjacent face normals.
    let mut vertices = [Vertex::default(); N_VERTICES];
    for (v, vertex) in vertices.iter_mut().enumerate() {
        let mut accumulated = Vec3::ZERO;
        for tri in indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if v != ia && v != ib && v != ic {
                continue;
            }
            let (va, vb, vc) = (positions[ia], positions[ib], positions[ic]);
            accumulated += (vb - va).cross(vc - va);
        }
        vertex.position = positions[v].to_array();
        vertex.normal = accumulated.normalize().to_array();
    }

    MeshData {
        vertices: vertices.to_vec(),
        indices: indices.to_vec(),
        edge_indices: edge_indices.to_vec(),
    }
}

/// Largest latitude band count whose vertex count (2 + (lat - 1) * 2 * lat)
/// still fits u16 index addressing.
const MAX_SPHERE_DIVISIONS: u32 = 181;

/// UV sphere of radius 1. `divisions` sets the latitude band count, clamped
/// to [2, 181] so every index fits in u16; longitude uses twice as many
/// segments. Edge indices trace both the meridians and the latitude rings.
#[must_use]
pub fn sphere(divisions: u32) -> MeshData {
    let latitude = divisions.clamp(2, MAX_SPHERE_DIVISIONS) as usize;
    let longitude = 2 * latitude;

    let n_vertices = 2 + (latitude - 1) * longitude;
    let n_indices = 6 * longitude * (latitude - 1);

    let mut vertices = Vec::with_capacity(n_vertices);
    let mut indices = Vec::with_capacity(n_indices);
    let mut edge_indices = Vec::new();

    let unit_vertex = |p: Vec3| Vertex::new(p.to_array(), [1.0; 3], p.normalize().to_array());

    // Top pole
    let top_index = 0_u16;
    vertices.push(unit_vertex(Vec3::new(0.0, 1.0, 0.0)));

    // Rings (excluding poles)
    for i in 1..latitude {
        let phi = i as f32 * PI / latitude as f32; // [0, pi]
        let y = phi.cos();
        let r = phi.sin();
        for j in 0..longitude {
            let theta = j as f32 * 2.0 * PI / longitude as f32; // [0, 2pi)
            vertices.push(unit_vertex(Vec3::new(r * theta.cos(), y, r * theta.sin())));
        }
    }

    // Bottom pole
    let bottom_index = vertices.len() as u16;
    vertices.push(unit_vertex(Vec3::new(0.0, -1.0, 0.0)));

    // Top cap
    for j in 0..longitude {
        let next = (j + 1) % longitude;
        indices.extend_from_slice(&[top_index, (1 + next) as u16, (1 + j) as u16]);
    }

    // Middle quads, two triangles each
    for i in 0..latitude.saturating_sub(2) {
        let row = 1 + i * longitude;
        let next_row = row + longitude;
        for j in 0..longitude {
            let next = (j + 1) % longitude;
            let a = (row + j) as u16;
            let b = (row + next) as u16;
            let c = (next_row + j) as u16;
            let d = (next_row + next) as u16;
            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[b, d, c]);
        }
    }

    // Bottom cap
    let base = 1 + (latitude - 2) * longitude;
    for j in 0..longitude {
        let next = (j + 1) % longitude;
        indices.extend_from_slice(&[(base + j) as u16, (base + next) as u16, bottom_index]);
    }

    // Meridians: pole to first ring, ring to ring, last ring to pole
    for j in 0..longitude {
        edge_indices.extend_from_slice(&[top_index, (1 + j) as u16]);
        for i in 0..latitude.saturating_sub(2) {
            let ring = 1 + i * longitude;
            edge_indices.extend_from_slice(&[(ring + j) as u16, (ring + longitude + j) as u16]);
        }
        edge_indices.extend_from_slice(&[(base + j) as u16, bottom_index]);
    }

    // Latitude rings (horizontal circles)
    for i in 1..latitude {
        let ring_start = 1 + (i - 1) * longitude;
        for j in 0..longitude {
            let next = (j + 1) % longitude;
            edge_indices.extend_from_slice(&[(ring_start + j) as u16, (ring_start + next) as u16]);
        }
    }

    MeshData {
        vertices,
        indices,
        edge_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_bounds(data: &MeshData) {
        let n = data.vertices.len() as u16;
        assert!(data.indices.iter().all(|&i| i < n));
        assert!(data.edge_indices.iter().all(|&i| i < n));
        assert_eq!(data.indices.len() % 3, 0, "triangle list");
        assert_eq!(data.edge_indices.len() % 2, 0, "line list");
    }

    #[test]
    fn cube_counts_and_bounds() {
        let data = cube();
        assert_eq!(data.vertices.len(), 8);
        assert_eq!(data.indices.len(), 36);
        assert_eq!(data.edge_indices.len(), 24);
        assert_indices_in_bounds(&data);
    }

    #[test]
    fn tetrahedron_normals_are_unit_and_outward() {
        let data = tetrahedron();
        assert_eq!(data.vertices.len(), 4);
        assert_indices_in_bounds(&data);
        for v in &data.vertices {
            let normal = Vec3::from(v.normal);
            assert!((normal.length() - 1.0).abs() < 1e-5);
            // A regular tetrahedron is centered at the origin, so vertex
            // normals point away from it.
            assert!(normal.dot(Vec3::from(v.position)) > 0.0);
        }
    }

    #[test]
    fn sphere_counts_match_parameterization() {
        let divisions = 10;
        let data = sphere(divisions);
        let latitude = divisions as usize;
        let longitude = 2 * latitude;
        assert_eq!(data.vertices.len(), 2 + (latitude - 1) * longitude);
        assert_eq!(data.indices.len(), 6 * longitude * (latitude - 1));
        assert_indices_in_bounds(&data);
    }

    #[test]
    fn sphere_vertices_lie_on_unit_sphere() {
        let data = sphere(6);
        for v in &data.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - 1.0).abs() < 1e-5);
            // Normals equal normalized positions for a sphere.
            assert!((Vec3::from(v.normal) - p.normalize()).length() < 1e-5);
        }
    }

    #[test]
    fn sphere_clamps_tiny_division_counts() {
        let data = sphere(0);
        assert_indices_in_bounds(&data);
        assert!(data.vertices.len() >= 6);
    }

    #[test]
    fn sphere_clamps_huge_division_counts_to_u16_addressing() {
        // 182 latitude bands would need 65886 vertices, past what u16
        // indices can address; the generator clamps instead of wrapping.
        let data = sphere(u32::MAX);
        assert!(data.vertices.len() <= usize::from(u16::MAX));
        assert_indices_in_bounds(&data);

        // The clamp sits exactly at the largest band count that fits.
        let at_limit = sphere(181);
        assert_eq!(at_limit.vertices.len(), data.vertices.len());
        assert_eq!(at_limit.vertices.len(), 2 + 180 * 362);
        assert_indices_in_bounds(&at_limit);
    }
}
