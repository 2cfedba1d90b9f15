//! FallbackPolicy step: what an empty cluster match turns into.

use habitat_core::models::{ClusterLabel, FallbackPolicy};
use habitat_core::snapshot::Snapshot;
use tracing::debug;

use super::ActiveSubset;

/// Resolve an empty cluster match according to `policy`.
pub fn resolve<'a>(
    policy: FallbackPolicy,
    snapshot: &'a Snapshot,
    label: &ClusterLabel,
) -> ActiveSubset<'a> {
    match policy {
        FallbackPolicy::Unfiltered => {
            debug!(%label, rows = snapshot.len(), "cluster matched nothing, using full snapshot");
            ActiveSubset {
                fallback_applied: true,
                ..ActiveSubset::full(snapshot)
            }
        }
        FallbackPolicy::Strict => {
            debug!(%label, "cluster matched nothing, strict policy keeps the empty subset");
            ActiveSubset {
                rows: Vec::new(),
                schema: snapshot.schema(),
                fallback_applied: false,
            }
        }
    }
}
