//! Error types for the Umbra preprocessing passes.
//!
//! All crates return `UmbraResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Umbra workspace.
#[derive(Debug, Error)]
pub enum UmbraError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Edge pairing finished with edges that no partner triangle claimed.
    ///
    /// Only raised when a volume build runs with `fail_on_open_edges`;
    /// the lenient default reports the count instead.
    #[error("Non-manifold mesh: {open_edges} edge(s) not shared by exactly two triangles")]
    NonManifold { open_edges: usize },
}

/// Convenience alias for `Result<T, UmbraError>`.
pub type UmbraResult<T> = Result<T, UmbraError>;
