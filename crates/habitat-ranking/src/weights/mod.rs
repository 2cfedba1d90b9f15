//! WeightResolver: raw inputs → user weights → adjusted weights → shares.

pub mod adjustments;
pub mod parser;

use std::collections::BTreeMap;

use habitat_core::config::WeightConfig;
use habitat_core::models::{
    Environment, LeisureScale, RecommendationRequest, ResolvedWeights, WeightVector,
};
use tracing::debug;

use adjustments::ContextAdjustments;

/// Parses, validates, and adjusts user weights.
#[derive(Debug, Clone, Copy)]
pub struct WeightResolver {
    default_weight: f64,
    adjustments: ContextAdjustments,
}

impl WeightResolver {
    pub fn new(config: &WeightConfig) -> Self {
        Self {
            default_weight: config.default_weight,
            adjustments: ContextAdjustments::new(config.environment_bonus),
        }
    }

    /// Resolve the weights carried by a request.
    pub fn resolve_request(&self, request: &RecommendationRequest) -> ResolvedWeights {
        self.resolve(&request.weights, request.environment.as_deref(), request.leisure)
    }

    /// Resolve raw weights plus optional context into shares.
    ///
    /// An unparsable weight resets all five to the default, never just the
    /// offending one. Unknown environment tags are ignored; leisure outside
    /// 1–5 is clamped.
    pub fn resolve(
        &self,
        raw: &BTreeMap<String, String>,
        environment: Option<&str>,
        leisure: Option<i64>,
    ) -> ResolvedWeights {
        let (user, parse_fallback) = match parser::parse_weights(raw, self.default_weight) {
            Ok(weights) => (weights, false),
            Err(e) => {
                debug!(error = %e, "weight input rejected, resetting all weights to default");
                (WeightVector::uniform(self.default_weight), true)
            }
        };

        let environment = environment.and_then(|tag| match tag.parse::<Environment>() {
            Ok(env) => Some(env),
            Err(e) => {
                debug!(error = %e, "ignoring environment tag");
                None
            }
        });
        let leisure = leisure.map(LeisureScale::new);

        let adjusted = self.adjustments.apply(user, environment, leisure);
        let shares = adjusted.shares();

        ResolvedWeights {
            user,
            adjusted,
            shares,
            parse_fallback,
            environment,
            leisure,
        }
    }
}

impl Default for WeightResolver {
    fn default() -> Self {
        Self::new(&WeightConfig::default())
    }
}
