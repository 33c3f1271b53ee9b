/// Hindsight engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot format version written by `export_snapshot`.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Upper bound on k-means iterations regardless of configuration.
pub const MAX_CLUSTER_ITERATIONS: usize = 1_000;

/// Characters of the problem text used when a title has to be derived.
pub const DERIVED_TITLE_MAX_CHARS: usize = 80;

/// Opens the header line written before each merged solution delta.
pub const SOLUTION_DELTA_HEADER_PREFIX: &str = "[update ";

/// Maximum success rate (percent).
pub const MAX_SUCCESS_RATE: f64 = 100.0;

/// Success rate assigned to a new non-failure entry when the caller gives none.
pub const DEFAULT_SUCCESS_RATE: f64 = 100.0;
