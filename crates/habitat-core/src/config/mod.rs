pub mod defaults;
mod observability_config;
mod selection_config;
mod snapshot_config;
mod weight_config;

pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use snapshot_config::SnapshotConfig;
pub use weight_config::WeightConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigurationError, HabitatResult};
use crate::models::Dimension;

/// Top-level engine configuration. Every section falls back to its defaults
/// when omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitatConfig {
    pub snapshot: SnapshotConfig,
    pub selection: SelectionConfig,
    pub weights: WeightConfig,
    pub observability: ObservabilityConfig,
}

impl HabitatConfig {
    /// Parse a config from TOML text, then validate it.
    pub fn from_toml(source: &str) -> HabitatResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigurationError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> HabitatResult<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| ConfigurationError::InvalidConfig {
                reason: format!("{}: {e}", path.display()),
            })?;
        Self::from_toml(&source)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> HabitatResult<()> {
        let invalid = |reason: &str| ConfigurationError::InvalidConfig {
            reason: reason.to_string(),
        };

        if self.selection.top_k == 0 {
            return Err(invalid("selection.top_k must be at least 1").into());
        }
        if self.selection.diverse_target == 0 {
            return Err(invalid("selection.diverse_target must be at least 1").into());
        }
        if self.selection.max_active_subset == 0 {
            return Err(invalid("selection.max_active_subset must be at least 1").into());
        }
        if !self.weights.default_weight.is_finite() || self.weights.default_weight < 0.0 {
            return Err(invalid("weights.default_weight must be a non-negative number").into());
        }
        if !self.weights.environment_bonus.is_finite() || self.weights.environment_bonus < 0.0 {
            return Err(invalid("weights.environment_bonus must be a non-negative number").into());
        }
        if self.snapshot.id_column.trim().is_empty() {
            return Err(invalid("snapshot.id_column must not be empty").into());
        }
        for key in self.snapshot.column_overrides.keys() {
            if key.parse::<Dimension>().is_err() {
                return Err(invalid(&format!(
                    "snapshot.column_overrides has unknown dimension '{key}'"
                ))
                .into());
            }
        }
        Ok(())
    }
}
