use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the base snapshot comes from and how its columns are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to a JSON array of entity records.
    pub path: Option<String>,
    /// Column holding the unique entity id.
    pub id_column: String,
    /// Column holding the cluster label. Absent from the data is fine.
    pub cluster_column: String,
    /// Explicit source column keyed by dimension name. Dimensions without an
    /// override are looked up by their English name and then their Spanish alias.
    pub column_overrides: BTreeMap<String, String>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: None,
            id_column: defaults::DEFAULT_ID_COLUMN.to_string(),
            cluster_column: defaults::DEFAULT_CLUSTER_COLUMN.to_string(),
            column_overrides: BTreeMap::new(),
        }
    }
}
