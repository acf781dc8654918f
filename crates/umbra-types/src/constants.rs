//! Numeric defaults for the preprocessing passes.

/// Fixed-point multiplier applied to vertex coordinates when two edge
/// endpoints are tested for identity. Coordinates closer than the
/// reciprocal of this value hash to the same weld key.
pub const WELD_RESOLUTION: f64 = 1.0e6;

/// Default snap-strength divisor for approximate casters.
/// Larger values tighten the coincidence tolerance.
pub const DEFAULT_SNAP_STRENGTH: f32 = 10_000.0;

/// Merged-member count above which a snap cluster is reported as
/// oversized. Optimized exports split a vertex a handful of ways;
/// more than this usually means the tolerance is too loose.
pub const SNAP_CLUSTER_WARN_SIZE: usize = 5;
