//! ScoreAggregator: composite index = Σ share[d] × normalized[d].

use habitat_core::models::{DimensionValues, Entity, ShareVector};

use crate::normalize::NormalizedSubset;

/// A subset row with its composite index.
#[derive(Debug, Clone)]
pub struct ScoredRow<'a> {
    pub entity: &'a Entity,
    pub normalized: DimensionValues,
    pub composite_index: f64,
}

/// Weighted-sum scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoreAggregator {
    shares: ShareVector,
}

impl ScoreAggregator {
    pub fn new(shares: ShareVector) -> Self {
        Self { shares }
    }

    /// Composite index of one set of normalized values.
    pub fn composite_index(&self, normalized: &DimensionValues) -> f64 {
        normalized
            .iter()
            .map(|(d, value)| self.shares.get(d) * value)
            .sum()
    }

    /// Score every row, keeping subset order.
    pub fn score<'a>(&self, subset: NormalizedSubset<'a>) -> Vec<ScoredRow<'a>> {
        subset
            .rows
            .into_iter()
            .map(|row| ScoredRow {
                entity: row.entity,
                composite_index: self.composite_index(&row.normalized),
                normalized: row.normalized,
            })
            .collect()
    }
}
