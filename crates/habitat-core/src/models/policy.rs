use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What the cluster filter does when the requested cluster matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Silently use the full, unfiltered snapshot.
    #[default]
    Unfiltered,
    /// Keep the empty result; the request then fails as data-unavailable.
    Strict,
}

/// Which weights order the dimensions of the diverse pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriorityPolicy {
    /// Weights after contextual adjustments.
    #[default]
    Resolved,
    /// Weights exactly as the user supplied them (or their defaults).
    User,
}
