use crate::errors::HabitatResult;
use crate::snapshot::Snapshot;

/// Provider of base dataset snapshots (file loader, database export, fixture).
pub trait ISnapshotSource: Send + Sync {
    /// Produce a fresh, fully validated snapshot.
    fn load(&self) -> HabitatResult<Snapshot>;
}
