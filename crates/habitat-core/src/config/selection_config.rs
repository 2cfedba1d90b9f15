use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{FallbackPolicy, PriorityPolicy};

/// Selection subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Entities returned by the ranked list.
    pub top_k: usize,
    /// Target size of the diverse pick.
    pub diverse_target: usize,
    /// Upper bound on the active subset before any sorting happens.
    pub max_active_subset: usize,
    /// What to do when a cluster filter matches nothing.
    pub fallback: FallbackPolicy,
    /// Which weights order the diverse pick's dimensions.
    pub priority: PriorityPolicy,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            diverse_target: defaults::DEFAULT_DIVERSE_TARGET,
            max_active_subset: defaults::DEFAULT_MAX_ACTIVE_SUBSET,
            fallback: FallbackPolicy::default(),
            priority: PriorityPolicy::default(),
        }
    }
}
