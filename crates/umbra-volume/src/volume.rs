//! Shadow-volume topology construction.
//!
//! A depth-fail stencil pass needs closed geometry whose silhouette
//! edges carry bridge quads it can extrude away from the light. This
//! module derives that topology from an arbitrary triangle mesh.
//! Adjacency is reconstructed from vertex positions rather than index
//! metadata, so edges split across hard-shading seams or disconnected
//! submeshes still weld together.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use umbra_mesh::CasterMesh;
use umbra_types::{UmbraError, UmbraResult};

use crate::config::VolumeConfig;

/// Replacement geometry for a shadow caster plus pairing diagnostics.
///
/// The mesh is a de-indexed copy of the source with recomputed flat
/// normals and an index buffer that lists every corner once (an
/// identity prefix) followed by two bridge triangles per paired edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowVolume {
    /// Geometry to install on the caster in place of its render mesh.
    pub mesh: CasterMesh,

    /// Geometric edges welded to an opposing half-edge.
    pub paired_edges: usize,

    /// Directed edges still unpaired when the sweep finished.
    pub open_edges: usize,
}

impl ShadowVolume {
    /// Builds the extruded shadow-volume geometry for `source`.
    ///
    /// The source is expanded to a triangle soup, every triangle gets
    /// its face normal on all three corners, and each edge is welded
    /// against previously seen edges by quantized endpoint positions.
    /// The second visit to an edge emits the two bridge triangles
    /// `(c0, p1, p0)` and `(c0, p0, c1)` joining the current corners
    /// `c0,c1` to the pending corners `p0,p1`. An edge seen a third
    /// time goes back to pending.
    ///
    /// Unpaired edges are dropped from the extrusion and counted in
    /// `open_edges`, or fail the build with
    /// [`UmbraError::NonManifold`] when `config.fail_on_open_edges` is
    /// set. Fails with [`UmbraError::InvalidMesh`] when the source does
    /// not validate and [`UmbraError::InvalidConfig`] when the weld
    /// resolution is not a positive finite number. The source mesh is
    /// never mutated.
    pub fn build(source: &CasterMesh, config: &VolumeConfig) -> UmbraResult<Self> {
        source.validate()?;
        if !(config.weld_resolution.is_finite() && config.weld_resolution > 0.0) {
            return Err(UmbraError::InvalidConfig(format!(
                "Weld resolution must be a positive finite number, got {}",
                config.weld_resolution
            )));
        }

        let mut mesh = source.to_non_indexed();
        let vertex_count = mesh.vertex_count();
        let triangle_count = mesh.triangle_count();

        // Every soup corner is referenced once before any bridge quads.
        let mut indices: Vec<u32> = (0..vertex_count as u32).collect();

        let mut pending: HashMap<EdgeKey, [u32; 2]> =
            HashMap::with_capacity(triangle_count * 3 / 2);
        let mut paired_edges = 0usize;

        for t in 0..triangle_count {
            let [a, b, c] = mesh.triangle(t);

            let v0 = mesh.position_vec3(a as usize);
            let v1 = mesh.position_vec3(b as usize);
            let v2 = mesh.position_vec3(c as usize);

            // Flat shading: the face normal lands on all three corners.
            // Zero-area triangles get the zero normal, never NaN.
            let normal = (v0 - v1).cross(v1 - v2).normalize_or_zero();
            mesh.set_normal(a as usize, normal.x, normal.y, normal.z);
            mesh.set_normal(b as usize, normal.x, normal.y, normal.z);
            mesh.set_normal(c as usize, normal.x, normal.y, normal.z);

            let ka = weld_key(v0, config.weld_resolution);
            let kb = weld_key(v1, config.weld_resolution);
            let kc = weld_key(v2, config.weld_resolution);

            let tri_edges = [(a, ka, b, kb), (b, kb, c, kc), (c, kc, a, ka)];
            for (c0, k0, c1, k1) in tri_edges {
                let key = EdgeKey::new(k0, k1);
                match pending.remove(&key) {
                    Some([p0, p1]) => {
                        // The bridge quad is degenerate until the
                        // caster's vertex stage extrudes it.
                        indices.extend_from_slice(&[c0, p1, p0, c0, p0, c1]);
                        paired_edges += 1;
                    }
                    None => {
                        pending.insert(key, [c0, c1]);
                    }
                }
            }
        }

        let open_edges = pending.len();
        if open_edges > 0 {
            if config.fail_on_open_edges {
                return Err(UmbraError::NonManifold { open_edges });
            }
            tracing::warn!(open_edges, "unpaired edges left without extrusion");
        }

        tracing::debug!(
            vertices = vertex_count,
            triangles = triangle_count,
            paired_edges,
            open_edges,
            "built shadow volume topology"
        );

        mesh.indices = Some(indices);

        Ok(Self {
            mesh,
            paired_edges,
            open_edges,
        })
    }
}

/// Quantized vertex position; two endpoints weld when all three
/// components land in the same cell.
type WeldKey = [i64; 3];

/// Order-independent identity of a geometric edge: the welded endpoint
/// pair, sorted so `a→b` and `b→a` collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EdgeKey {
    a: WeldKey,
    b: WeldKey,
}

impl EdgeKey {
    fn new(a: WeldKey, b: WeldKey) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}

/// Quantizes a position to its weld cell. Components truncate toward
/// zero, so the two cells either side of zero merge into one.
fn weld_key(p: Vec3, resolution: f64) -> WeldKey {
    [
        (p.x as f64 * resolution).trunc() as i64,
        (p.y as f64 * resolution).trunc() as i64,
        (p.z as f64 * resolution).trunc() as i64,
    ]
}
