//! Selection: ranked top-K or round-robin diverse pick, behind one mode flag.

pub mod diverse;
pub mod ranked;

use habitat_core::config::SelectionConfig;
use habitat_core::errors::{HabitatError, HabitatResult};
use habitat_core::models::{
    Dimension, PriorityPolicy, ResolvedWeights, SelectionMode, SelectionOutcome,
};

use crate::scoring::ScoredRow;

/// Chooses which scored rows reach the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct DiverseSelector {
    top_k: usize,
    diverse_target: usize,
    priority: PriorityPolicy,
}

impl DiverseSelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            top_k: config.top_k,
            diverse_target: config.diverse_target,
            priority: config.priority,
        }
    }

    /// Dimension order for the diverse pick under the configured policy.
    pub fn priority_order(&self, weights: &ResolvedWeights) -> Vec<Dimension> {
        match self.priority {
            PriorityPolicy::Resolved => weights.adjusted.priority_order(),
            PriorityPolicy::User => weights.user.priority_order(),
        }
    }

    /// Run the selection `mode` over `rows`. `limit` overrides the configured size.
    pub fn select(
        &self,
        mode: SelectionMode,
        rows: Vec<ScoredRow<'_>>,
        weights: &ResolvedWeights,
        limit: Option<usize>,
    ) -> HabitatResult<SelectionOutcome> {
        match mode {
            SelectionMode::Ranked => {
                ranked::select(rows, limit.unwrap_or(self.top_k)).map(SelectionOutcome::Ranked)
            }
            SelectionMode::Diverse => diverse::select(
                &rows,
                self.priority_order(weights),
                limit.unwrap_or(self.diverse_target),
            )
            .map(SelectionOutcome::Diverse),
        }
    }
}

impl Default for DiverseSelector {
    fn default() -> Self {
        Self::new(&SelectionConfig::default())
    }
}

pub(crate) fn empty_subset() -> HabitatError {
    HabitatError::DataUnavailable {
        reason: "active subset is empty".to_string(),
    }
}
