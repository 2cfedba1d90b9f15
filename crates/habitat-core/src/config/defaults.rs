// Single source of truth for all default values.

// --- Snapshot ---
pub const DEFAULT_ID_COLUMN: &str = "name";
pub const DEFAULT_CLUSTER_COLUMN: &str = "cluster_poblacion";

// --- Selection ---
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_DIVERSE_TARGET: usize = 3;
pub const DEFAULT_MAX_ACTIVE_SUBSET: usize = 10_000;

// --- Weights ---
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_ENVIRONMENT_BONUS: f64 = 1.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_REQUEST_LOG_CAPACITY: usize = 10_000;
