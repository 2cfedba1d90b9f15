//! SnapshotStore: the process-wide snapshot reference, swapped whole on reload.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use habitat_core::errors::HabitatResult;
use habitat_core::snapshot::Snapshot;
use habitat_core::traits::ISnapshotSource;
use habitat_observability::reload_span;
use tracing::{info, warn};

/// Holds the active snapshot.
///
/// The lock only guards cloning or replacing the `Arc`; requests hold their
/// own `Arc` for their whole duration, so a reload never exposes a mix of
/// old and new rows.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
    generation: AtomicU64,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
            generation: AtomicU64::new(0),
        }
    }

    /// Load the initial snapshot from `source`.
    pub fn load(source: &dyn ISnapshotSource) -> HabitatResult<Self> {
        Ok(Self::new(source.load()?))
    }

    /// The snapshot new requests should run against.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of swaps since construction.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Swap in `snapshot`, returning the one it replaced.
    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(snapshot);
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, next)
        };
        self.generation.fetch_add(1, Ordering::AcqRel);
        previous
    }

    /// Build a new snapshot from `source` and swap it in.
    ///
    /// Loading happens outside the lock. On failure the current snapshot stays.
    pub fn reload(&self, source: &dyn ISnapshotSource) -> HabitatResult<u64> {
        let span = reload_span!(self.generation());
        let _enter = span.enter();

        let snapshot = match source.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "snapshot reload failed, keeping current snapshot");
                return Err(e);
            }
        };

        let entities = snapshot.len();
        let fingerprint = snapshot.fingerprint().to_string();
        let previous = self.replace(snapshot);
        let generation = self.generation();
        info!(
            generation,
            entities,
            %fingerprint,
            previous_fingerprint = %previous.fingerprint(),
            "snapshot swapped"
        );
        Ok(generation)
    }
}
