//! Contextual weight adjustments: environment tag and leisure scale.
//!
//! Adjustments are additive and applied to the parsed (or default) weights
//! before shares are computed.

use habitat_core::models::{Dimension, Environment, LeisureScale, WeightVector};

/// Dimensions the leisure bonus is split across, evenly.
pub const LEISURE_TARGETS: [Dimension; 2] = [Dimension::Transport, Dimension::Economy];

/// Deterministic additive adjustments.
#[derive(Debug, Clone, Copy)]
pub struct ContextAdjustments {
    environment_bonus: f64,
}

impl ContextAdjustments {
    pub fn new(environment_bonus: f64) -> Self {
        Self { environment_bonus }
    }

    /// Dimensions an environment tag promotes.
    pub fn environment_targets(environment: Environment) -> &'static [Dimension] {
        match environment {
            Environment::Urban => &[Dimension::Transport, Dimension::Economy],
            Environment::Natural => &[Dimension::Housing, Dimension::Health],
            Environment::Mixed => &[],
        }
    }

    /// Apply environment then leisure adjustments to `weights`.
    pub fn apply(
        &self,
        weights: WeightVector,
        environment: Option<Environment>,
        leisure: Option<LeisureScale>,
    ) -> WeightVector {
        let mut values = weights.0;

        if let Some(environment) = environment {
            for dimension in Self::environment_targets(environment) {
                values.add(*dimension, self.environment_bonus);
            }
        }

        if let Some(leisure) = leisure {
            let per_target = f64::from(leisure.bonus()) / LEISURE_TARGETS.len() as f64;
            for dimension in LEISURE_TARGETS {
                values.add(dimension, per_target);
            }
        }

        WeightVector(values)
    }
}

impl Default for ContextAdjustments {
    fn default() -> Self {
        Self::new(1.0)
    }
}
