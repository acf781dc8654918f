//! Volume builder and caster preparation configuration.
//!
//! Parameters that control edge welding, open-edge policy, and which
//! preprocessing path a caster's render mesh is routed through.

use serde::{Deserialize, Serialize};

/// Configuration for shadow-volume construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Fixed-point multiplier applied to vertex coordinates before
    /// truncation when welding edge endpoints. Two endpoints weld when
    /// all three quantized components match.
    pub weld_resolution: f64,

    /// Whether edges left unpaired after the sweep fail the build
    /// instead of being reported and dropped from the extrusion.
    pub fail_on_open_edges: bool,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            weld_resolution: umbra_types::constants::WELD_RESOLUTION,
            fail_on_open_edges: false,
        }
    }
}

impl VolumeConfig {
    /// Creates a config that rejects meshes with unpaired edges.
    pub fn strict() -> Self {
        Self {
            fail_on_open_edges: true,
            ..Default::default()
        }
    }
}

/// Which preprocessing path a caster's render mesh goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CasterMode {
    /// Clone the render geometry and smooth its normals in place.
    /// Cheap, and good enough for casters whose silhouette tolerates
    /// the original triangle count.
    Approximate,

    /// Build the full extruded shadow-volume topology.
    #[default]
    Exact,
}

/// Per-caster preprocessing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasterConfig {
    /// Preprocessing path for this caster.
    pub mode: CasterMode,

    /// Snap divisor handed to the approximate path; the snap distance
    /// is the mesh bounding-box diagonal divided by this.
    pub snap_strength: f32,

    /// Builder settings for the exact path.
    pub volume: VolumeConfig,
}

impl Default for CasterConfig {
    fn default() -> Self {
        Self {
            mode: CasterMode::default(),
            snap_strength: umbra_types::constants::DEFAULT_SNAP_STRENGTH,
            volume: VolumeConfig::default(),
        }
    }
}

impl CasterConfig {
    /// Creates settings for the approximate path at the stock snap
    /// strength.
    pub fn approximate() -> Self {
        Self {
            mode: CasterMode::Approximate,
            ..Default::default()
        }
    }
}
