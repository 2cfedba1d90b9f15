//! ClusterFilter: narrow the snapshot to one cluster, with a fallback step.

pub mod fallback;

use habitat_core::models::{ClusterSelector, Entity, FallbackPolicy};
use habitat_core::snapshot::{Snapshot, SnapshotSchema};
use tracing::debug;

/// Rows a request works on. Borrows from the shared snapshot, never copies
/// or mutates it.
#[derive(Debug, Clone)]
pub struct ActiveSubset<'a> {
    rows: Vec<&'a Entity>,
    schema: &'a SnapshotSchema,
    fallback_applied: bool,
}

impl<'a> ActiveSubset<'a> {
    /// Every row of the snapshot, in order.
    pub fn full(snapshot: &'a Snapshot) -> Self {
        Self {
            rows: snapshot.entities().iter().collect(),
            schema: snapshot.schema(),
            fallback_applied: false,
        }
    }

    pub fn rows(&self) -> &[&'a Entity] {
        &self.rows
    }

    pub fn schema(&self) -> &'a SnapshotSchema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when the cluster matched nothing and the fallback kicked in.
    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }
}

/// Cluster pre-filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterFilter {
    policy: FallbackPolicy,
}

impl ClusterFilter {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Narrow `snapshot` to the rows whose canonical label equals the selector's.
    ///
    /// Snapshots without a cluster column and the `Any` selector pass
    /// through untouched. An empty match is handed to the fallback policy.
    pub fn apply<'a>(&self, snapshot: &'a Snapshot, selector: &ClusterSelector) -> ActiveSubset<'a> {
        let label = match selector {
            ClusterSelector::Any => return ActiveSubset::full(snapshot),
            ClusterSelector::Label(label) => label,
        };

        if !snapshot.schema().has_cluster_column() {
            debug!(%label, "snapshot has no cluster column, skipping cluster filter");
            return ActiveSubset::full(snapshot);
        }

        let matched: Vec<&Entity> = snapshot
            .entities()
            .iter()
            .filter(|e| e.cluster.as_ref() == Some(label))
            .collect();

        debug!(%label, matched = matched.len(), "cluster filter applied");

        if matched.is_empty() {
            return fallback::resolve(self.policy, snapshot, label);
        }

        ActiveSubset {
            rows: matched,
            schema: snapshot.schema(),
            fallback_applied: false,
        }
    }
}
