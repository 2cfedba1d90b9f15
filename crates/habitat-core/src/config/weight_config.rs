use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight used for unsupplied dimensions and after a parse reset.
    pub default_weight: f64,
    /// Amount an environment tag adds to each of its two dimensions.
    pub environment_bonus: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            default_weight: defaults::DEFAULT_WEIGHT,
            environment_bonus: defaults::DEFAULT_ENVIRONMENT_BONUS,
        }
    }
}
