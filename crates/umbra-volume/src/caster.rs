//! Caster preparation.
//!
//! A shadow scene keeps a dedicated geometry per caster, derived from
//! the render mesh at load time. This module routes a render mesh
//! through the configured preprocessing path and hands back the
//! geometry the scene installs.

use umbra_mesh::{snap_normals, CasterMesh};
use umbra_types::UmbraResult;

use crate::config::{CasterConfig, CasterMode};
use crate::volume::ShadowVolume;

/// Produces the shadow geometry for one caster.
///
/// [`CasterMode::Approximate`] clones the render mesh and smooths its
/// normals in place, reconciling the split vertices hard-edged shading
/// leaves behind. [`CasterMode::Exact`] builds the full extruded
/// volume topology. Errors from the underlying pass propagate
/// unchanged; the source mesh is never mutated.
pub fn prepare_caster(source: &CasterMesh, config: &CasterConfig) -> UmbraResult<CasterMesh> {
    match config.mode {
        CasterMode::Approximate => {
            let mut mesh = source.clone();
            let report = snap_normals(&mut mesh, config.snap_strength)?;
            tracing::debug!(
                clusters = report.clusters,
                oversized = report.oversized_clusters,
                "prepared approximate caster"
            );
            Ok(mesh)
        }
        CasterMode::Exact => {
            let volume = ShadowVolume::build(source, &config.volume)?;
            tracing::debug!(
                paired_edges = volume.paired_edges,
                open_edges = volume.open_edges,
                "prepared exact caster"
            );
            Ok(volume.mesh)
        }
    }
}
