use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use super::Snapshot;
use crate::config::SnapshotConfig;
use crate::errors::{ConfigurationError, HabitatResult, SnapshotError};
use crate::traits::ISnapshotSource;

/// Loads a snapshot from a JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
    config: SnapshotConfig,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, config: SnapshotConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Use the path configured in `snapshot.path`.
    pub fn from_config(config: &SnapshotConfig) -> HabitatResult<Self> {
        let path = config
            .path
            .clone()
            .ok_or_else(|| ConfigurationError::InvalidConfig {
                reason: "snapshot.path is not set".to_string(),
            })?;
        Ok(Self::new(path, config.clone()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ISnapshotSource for JsonSnapshotSource {
    fn load(&self) -> HabitatResult<Snapshot> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| SnapshotError::ReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        let records: Vec<Value> = serde_json::from_str(&text)?;
        let snapshot = Snapshot::from_records(&records, &self.config)?;
        info!(
            path = %self.path.display(),
            entities = snapshot.len(),
            fingerprint = %snapshot.fingerprint(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
