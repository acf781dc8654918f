//! # umbra-mesh
//!
//! Triangle mesh representation for shadow-caster preprocessing, with a
//! SoA (Structure of Arrays) buffer layout and an optional index buffer
//! so both indexed meshes and raw triangle soups are first-class inputs.
//!
//! ## Key Types
//!
//! - [`CasterMesh`] — The core mesh type. Stores positions and normals in
//!   contiguous SoA buffers, exchanged with the renderer as interleaved
//!   triples at the crate boundary.
//! - [`snap_normals`] — Merges normals of near-coincident vertices that
//!   geometry optimization split apart.
//! - Procedural generators for test and benchmark meshes (tetrahedron,
//!   box, quad grid).

pub mod generators;
pub mod mesh;
pub mod snap;

pub use mesh::CasterMesh;
pub use snap::{snap_normals, SnapReport};
