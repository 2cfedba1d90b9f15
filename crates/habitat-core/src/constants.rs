/// Habitat system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of scored dimensions.
pub const DIMENSION_COUNT: usize = 5;

/// Request sentinels meaning "no cluster filter".
pub const ANY_CLUSTER_SENTINELS: [&str; 2] = ["any", "cualquiera"];

/// Column names tried for the entity id when the configured one is absent.
pub const ID_COLUMN_FALLBACKS: [&str; 3] = ["Nombre", "nombre", "municipio"];

/// Lowest and highest accepted leisure scale values.
pub const LEISURE_MIN: u8 = 1;
pub const LEISURE_MAX: u8 = 5;

/// Tolerance used when comparing share sums.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-9;
