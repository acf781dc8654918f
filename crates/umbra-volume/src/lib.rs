//! # umbra-volume
//!
//! Shadow-volume topology construction for depth-fail stencil shadow
//! rendering, plus the load-time routing that prepares a render mesh
//! for its role as a shadow caster.
//!
//! ## Key Types
//!
//! - [`ShadowVolume`] — De-indexed caster geometry with flat normals,
//!   bridge quads on every paired edge, and pairing diagnostics.
//! - [`VolumeConfig`] — Edge-welding resolution and open-edge policy.
//! - [`CasterConfig`] / [`CasterMode`] — Per-caster choice between the
//!   approximate (normal-smoothing) and exact (extruded volume) paths.
//! - [`prepare_caster`] — The load-time entry point that turns a render
//!   mesh into its shadow geometry.

pub mod caster;
pub mod config;
pub mod volume;

pub use caster::prepare_caster;
pub use config::{CasterConfig, CasterMode, VolumeConfig};
pub use volume::ShadowVolume;
