use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ClusterSelector;

/// Selection algorithm for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Global top-K by composite index.
    #[default]
    Ranked,
    /// Round-robin pick of one standout entity per priority dimension.
    Diverse,
}

/// A recommendation request, already lexically parsed by the caller.
///
/// Weights stay as raw strings: the engine owns their semantic validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct RecommendationRequest {
    pub cluster: ClusterSelector,
    /// Raw weight inputs keyed by dimension name (English or source alias).
    pub weights: BTreeMap<String, String>,
    /// "urban", "natural" or "mixed". Anything else is ignored.
    pub environment: Option<String>,
    /// Leisure scale, 1–5.
    pub leisure: Option<i64>,
    pub mode: SelectionMode,
    /// Overrides the configured result size for the chosen mode.
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_cluster(mut self, cluster: ClusterSelector) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn with_weight(mut self, dimension: impl Into<String>, raw: impl Into<String>) -> Self {
        self.weights.insert(dimension.into(), raw.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_leisure(mut self, leisure: i64) -> Self {
        self.leisure = Some(leisure);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
