use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ClusterLabel, DimensionValues};

/// One scored area (municipality) as loaded into a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    /// Unique name or code.
    pub id: String,
    /// Canonical cluster label, if the source carries one for this row.
    pub cluster: Option<ClusterLabel>,
    /// Raw, non-normalized dimension values.
    pub values: DimensionValues,
}

impl Entity {
    pub fn new(id: impl Into<String>, cluster: Option<ClusterLabel>, values: DimensionValues) -> Self {
        Self {
            id: id.into(),
            cluster,
            values,
        }
    }
}
