//! Normal snapping across near-coincident vertices.
//!
//! Export and optimization pipelines split shared vertices, leaving
//! coincident copies with divergent normals; under normal-based
//! extrusion those copies pull apart and the caster visibly cracks.
//! This pass clusters vertices that land within a tolerance derived
//! from the mesh bounding box and writes the cluster-average normal
//! back to every copy.

use umbra_types::constants::SNAP_CLUSTER_WARN_SIZE;
use umbra_types::{UmbraError, UmbraResult};

use crate::mesh::CasterMesh;

/// Outcome of one snap pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapReport {
    /// Number of coincidence clusters whose normals were merged.
    pub clusters: usize,
    /// Clusters with more than [`SNAP_CLUSTER_WARN_SIZE`] merged members.
    pub oversized_clusters: usize,
}

/// Merges the normals of vertices closer than `diagonal / strength`.
///
/// The coincidence tolerance is the length of the bounding-box diagonal
/// divided by `strength`, so the same strength value adapts to meshes of
/// any scale; larger values tighten the tolerance. Vertices are swept in
/// x order and each unvisited vertex collects every later vertex within
/// the tolerance into a cluster. The cluster's normals are replaced by
/// their arithmetic mean. The mean is not renormalized; the shortened
/// average also softens the extrusion across the seam.
///
/// Positions and topology are never touched. With every vertex at the
/// same position the diagonal is zero and the pass reports no clusters.
///
/// Fails with [`UmbraError::InvalidMesh`] when the mesh is empty or the
/// normal channels do not match the position channels, and with
/// [`UmbraError::InvalidConfig`] when `strength` is not a positive
/// finite number. Nothing is mutated on the error paths.
pub fn snap_normals(mesh: &mut CasterMesh, strength: f32) -> UmbraResult<SnapReport> {
    let n = mesh.vertex_count();

    if n == 0 {
        return Err(UmbraError::InvalidMesh("Mesh has no vertices".into()));
    }
    if mesh.pos_y.len() != n || mesh.pos_z.len() != n {
        return Err(UmbraError::InvalidMesh(
            "Position arrays have inconsistent lengths".into(),
        ));
    }
    if mesh.normal_x.len() != n || mesh.normal_y.len() != n || mesh.normal_z.len() != n {
        return Err(UmbraError::InvalidMesh(format!(
            "Normal buffer length ({}) does not match vertex count ({})",
            mesh.normal_x.len(),
            n
        )));
    }
    if !(strength.is_finite() && strength > 0.0) {
        return Err(UmbraError::InvalidConfig(format!(
            "Snap strength must be a positive finite number, got {}",
            strength
        )));
    }

    // Bounding box and x-sorted sweep order.
    let mut mins = [f32::INFINITY; 3];
    let mut maxs = [f32::NEG_INFINITY; 3];
    let mut sorted: Vec<(f32, f32, f32, u32)> = Vec::with_capacity(n);
    for i in 0..n {
        let x = mesh.pos_x[i];
        let y = mesh.pos_y[i];
        let z = mesh.pos_z[i];
        mins[0] = mins[0].min(x);
        mins[1] = mins[1].min(y);
        mins[2] = mins[2].min(z);
        maxs[0] = maxs[0].max(x);
        maxs[1] = maxs[1].max(y);
        maxs[2] = maxs[2].max(z);
        sorted.push((x, y, z, i as u32));
    }
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let extent_x = maxs[0] - mins[0];
    let extent_y = maxs[1] - mins[1];
    let extent_z = maxs[2] - mins[2];
    let diagonal =
        (extent_x * extent_x + extent_y * extent_y + extent_z * extent_z).sqrt();
    let snap_distance = diagonal / strength;

    let mut processed = vec![false; n];
    let mut cluster: Vec<u32> = Vec::new();
    let mut clusters = 0usize;
    let mut oversized = 0usize;

    for i in 0..n {
        if processed[i] {
            continue;
        }
        let (xc, yc, zc, anchor) = sorted[i];

        cluster.clear();
        for j in (i + 1)..n {
            if processed[j] {
                continue;
            }
            let (xn, yn, zn, candidate) = sorted[j];

            // Sorted by x, so no candidate past this window can qualify.
            if xn - xc >= snap_distance {
                break;
            }

            let dx = xc - xn;
            let dy = yc - yn;
            let dz = zc - zn;
            let distance = (dx * dx + dy * dy + dz * dz).sqrt();
            if distance < snap_distance {
                cluster.push(candidate);
                processed[j] = true;
            }
        }

        if cluster.is_empty() {
            continue;
        }
        clusters += 1;
        if cluster.len() > SNAP_CLUSTER_WARN_SIZE {
            oversized += 1;
        }

        // Average the anchor's normal with every cluster member's.
        let ai = anchor as usize;
        let mut nx = mesh.normal_x[ai];
        let mut ny = mesh.normal_y[ai];
        let mut nz = mesh.normal_z[ai];
        for &member in &cluster {
            let mi = member as usize;
            nx += mesh.normal_x[mi];
            ny += mesh.normal_y[mi];
            nz += mesh.normal_z[mi];
        }
        let count = (cluster.len() + 1) as f32;
        nx /= count;
        ny /= count;
        nz /= count;

        mesh.set_normal(ai, nx, ny, nz);
        for &member in &cluster {
            mesh.set_normal(member as usize, nx, ny, nz);
        }
    }

    if clusters > 0 {
        tracing::debug!(clusters, snap_distance, "snapped normal clusters");
    }
    if oversized > 0 {
        tracing::warn!(
            oversized,
            limit = SNAP_CLUSTER_WARN_SIZE,
            "snap clusters exceeded the expected duplicate count"
        );
    }

    Ok(SnapReport {
        clusters,
        oversized_clusters: oversized,
    })
}
