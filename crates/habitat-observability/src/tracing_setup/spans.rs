//! Span definitions per operation: recommendation and snapshot reload.

/// Create a recommendation span.
#[macro_export]
macro_rules! recommendation_span {
    ($mode:expr, $cluster:expr) => {
        tracing::info_span!("habitat.recommendation", mode = ?$mode, cluster = %$cluster)
    };
}

/// Create a snapshot reload span.
#[macro_export]
macro_rules! reload_span {
    ($generation:expr) => {
        tracing::info_span!("habitat.reload", generation = $generation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMENDATION: &str = "habitat.recommendation";
    pub const RELOAD: &str = "habitat.reload";
}
