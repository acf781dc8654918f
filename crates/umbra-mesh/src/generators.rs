//! Procedural mesh generators for tests and benchmarks.
//!
//! These generators produce deterministic, size-configurable meshes with
//! outward winding. The tetrahedron is a raw triangle soup, the box and
//! grid are indexed — together they cover both ingestion paths of the
//! preprocessing passes.

use glam::Vec3;

use crate::mesh::CasterMesh;

/// Generates a regular tetrahedron as a non-indexed triangle soup.
///
/// Four faces, twelve vertices, flat outward normals; every corner of
/// the solid exists as three coincident vertices carrying the normals
/// of the three faces that meet there. Vertices sit at alternating
/// corners of the axis-aligned cube with half-extent `size / 2`.
///
/// # Example
/// ```
/// use umbra_mesh::generators::tetrahedron;
/// let mesh = tetrahedron(1.0);
/// assert_eq!(mesh.vertex_count(), 12); // 3 per face, no sharing
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn tetrahedron(size: f32) -> CasterMesh {
    let k = size * 0.5;
    let a = Vec3::new(k, k, k);
    let b = Vec3::new(k, -k, -k);
    let c = Vec3::new(-k, k, -k);
    let d = Vec3::new(-k, -k, k);

    let faces = [[a, b, c], [a, d, b], [a, c, d], [b, d, c]];

    let mut mesh = CasterMesh::with_capacity(12);
    for [v0, v1, v2] in faces {
        let normal = (v1 - v0).cross(v2 - v1).normalize();
        for v in [v0, v1, v2] {
            mesh.pos_x.push(v.x);
            mesh.pos_y.push(v.y);
            mesh.pos_z.push(v.z);
            mesh.normal_x.push(normal.x);
            mesh.normal_y.push(normal.y);
            mesh.normal_z.push(normal.z);
        }
    }
    mesh
}

/// Generates an indexed axis-aligned box centered at the origin.
///
/// 24 vertices (four per face, so each face keeps its own flat normal)
/// and 36 indices. Every corner of the solid is split three ways — the
/// layout renderers produce for hard-edged shading, and the shape the
/// snapping pass is built to reconcile.
///
/// # Example
/// ```
/// use umbra_mesh::generators::box_mesh;
/// let mesh = box_mesh(2.0);
/// assert_eq!(mesh.vertex_count(), 24); // 4 per face
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn box_mesh(size: f32) -> CasterMesh {
    let h = size * 0.5;

    let mut mesh = CasterMesh::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +X
        (
            [1.0, 0.0, 0.0],
            [[h, -h, -h], [h, h, -h], [h, h, h], [h, -h, h]],
        ),
        // -X
        (
            [-1.0, 0.0, 0.0],
            [[-h, -h, h], [-h, h, h], [-h, h, -h], [-h, -h, -h]],
        ),
        // +Y
        (
            [0.0, 1.0, 0.0],
            [[-h, h, -h], [-h, h, h], [h, h, h], [h, h, -h]],
        ),
        // -Y
        (
            [0.0, -1.0, 0.0],
            [[-h, -h, h], [-h, -h, -h], [h, -h, -h], [h, -h, h]],
        ),
        // +Z
        (
            [0.0, 0.0, 1.0],
            [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
        ),
        // -Z
        (
            [0.0, 0.0, -1.0],
            [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
        ),
    ];

    for (normal, corners) in faces {
        let base = mesh.vertex_count() as u32;
        for corner in corners {
            mesh.pos_x.push(corner[0]);
            mesh.pos_y.push(corner[1]);
            mesh.pos_z.push(corner[2]);
            mesh.normal_x.push(normal[0]);
            mesh.normal_y.push(normal[1]);
            mesh.normal_z.push(normal[2]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh.indices = Some(indices);
    mesh
}

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0, normals facing +Z. Being open,
/// it is the canonical input for exercising unpaired-edge diagnostics:
/// every perimeter edge has only one adjacent triangle.
///
/// # Example
/// ```
/// use umbra_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> CasterMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = CasterMesh::with_capacity(verts_x * verts_y);
    let mut indices = Vec::with_capacity(cols * rows * 6);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    // Generate vertices
    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;

            mesh.pos_x.push(-half_w + u * width);
            mesh.pos_y.push(half_h - v * height); // Top to bottom
            mesh.pos_z.push(0.0);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0); // Facing +Z
        }
    }

    // Generate triangles (two per quad)
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            indices.push(top_left);
            indices.push(bot_left);
            indices.push(top_right);

            // Lower-right triangle
            indices.push(top_right);
            indices.push(bot_left);
            indices.push(bot_right);
        }
    }

    mesh.indices = Some(indices);
    mesh
}
