use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Dimension, DimensionValues, Environment, LeisureScale};

/// Non-negative preference weight per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightVector(pub DimensionValues);

impl WeightVector {
    pub fn uniform(weight: f64) -> Self {
        Self(DimensionValues::uniform(weight))
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0.get(dimension)
    }

    pub fn sum(&self) -> f64 {
        self.0.sum()
    }

    /// Dimensions sorted by weight, heaviest first. Equal weights keep
    /// canonical dimension order.
    pub fn priority_order(&self) -> Vec<Dimension> {
        let mut order = Dimension::ALL.to_vec();
        order.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    /// Divide every weight by the total. An all-zero vector is divided by 1.0
    /// instead, so its shares stay zero rather than becoming NaN.
    ///
    /// Weights are scaled by the largest one first, so the total of large
    /// finite weights cannot overflow.
    pub fn shares(&self) -> ShareVector {
        let peak = self.0.iter().map(|(_, w)| w).fold(0.0, f64::max);
        if peak <= 0.0 {
            return ShareVector(DimensionValues::default());
        }
        let scaled = DimensionValues::from_fn(|d| self.get(d) / peak);
        let total = scaled.sum();
        ShareVector(DimensionValues::from_fn(|d| scaled.get(d) / total))
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Each dimension's fraction of the total weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareVector(pub DimensionValues);

impl ShareVector {
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0.get(dimension)
    }

    pub fn sum(&self) -> f64 {
        self.0.sum()
    }
}

/// Outcome of weight resolution for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedWeights {
    /// Parsed user weights, or uniform defaults after a parse reset.
    pub user: WeightVector,
    /// `user` plus contextual adjustments.
    pub adjusted: WeightVector,
    /// `adjusted` normalized into shares.
    pub shares: ShareVector,
    /// True when an unusable input reset every weight to its default.
    pub parse_fallback: bool,
    pub environment: Option<Environment>,
    pub leisure: Option<LeisureScale>,
}
