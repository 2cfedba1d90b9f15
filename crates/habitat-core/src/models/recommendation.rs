use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ClusterSelector, Dimension, DimensionValues, Entity, ResolvedWeights, SelectionMode};

/// One row of the ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedEntity {
    /// 1-based position in the list.
    pub rank: usize,
    pub entity: Entity,
    /// Values min-max normalized over the active subset.
    pub normalized: DimensionValues,
    pub composite_index: f64,
}

/// One entity chosen by the diverse pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandoutEntity {
    pub entity: Entity,
    /// The dimension this entity was picked for.
    pub standout_dimension: Dimension,
    /// Raw value on the standout dimension.
    pub standout_value: f64,
    pub composite_index: f64,
}

/// Result of the round-robin diverse pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiversePick {
    /// Picks in selection order.
    pub picks: Vec<StandoutEntity>,
    /// Size the pick aimed for.
    pub target: usize,
    /// Dimension order the pick walked through.
    pub priority: Vec<Dimension>,
}

impl DiversePick {
    /// Fewer picks than targeted. A valid, complete result.
    pub fn is_short(&self) -> bool {
        self.picks.len() < self.target
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// Selected entities, shaped by the selection mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "mode", content = "result")]
pub enum SelectionOutcome {
    Ranked(Vec<RankedEntity>),
    Diverse(DiversePick),
}

impl SelectionOutcome {
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Ranked(_) => SelectionMode::Ranked,
            Self::Diverse(_) => SelectionMode::Diverse,
        }
    }

    /// Number of entities returned.
    pub fn len(&self) -> usize {
        match self {
            Self::Ranked(rows) => rows.len(),
            Self::Diverse(pick) => pick.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity ids in output order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Ranked(rows) => rows.iter().map(|r| r.entity.id.as_str()).collect(),
            Self::Diverse(pick) => pick.picks.iter().map(|p| p.entity.id.as_str()).collect(),
        }
    }
}

/// What the engine actually applied while serving a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedRequest {
    pub cluster: ClusterSelector,
    /// True when the cluster matched nothing and the full snapshot was used.
    pub fallback_applied: bool,
    pub active_subset_size: usize,
    pub weights: ResolvedWeights,
}

/// Full response handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub outcome: SelectionOutcome,
    pub applied: AppliedRequest,
    /// Fingerprint of the snapshot the request ran against.
    pub snapshot_fingerprint: String,
}
