//! Immutable dataset snapshot and its ingestion boundary.
//!
//! Cluster labels are canonicalized here, once, so nothing downstream ever
//! compares mixed string/integer/float cluster encodings.

mod ingest;
mod schema;
mod source;

pub use schema::SnapshotSchema;
pub use source::JsonSnapshotSource;

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};

use crate::errors::{HabitatResult, SnapshotError};
use crate::models::{ClusterLabel, Entity};

/// Immutable, ordered set of entities shared by every request.
///
/// Never mutated after construction. Refreshing data means building a new
/// snapshot and swapping the shared reference.
#[derive(Debug, Clone)]
pub struct Snapshot {
    entities: Vec<Entity>,
    schema: SnapshotSchema,
    fingerprint: String,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from already-typed entities.
    ///
    /// Ids must be unique and every value on a dimension the schema declares
    /// must be finite.
    pub fn new(entities: Vec<Entity>, schema: SnapshotSchema) -> HabitatResult<Self> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id.as_str()) {
                return Err(SnapshotError::DuplicateId {
                    id: entity.id.clone(),
                }
                .into());
            }
            for dimension in schema.dimensions() {
                if !entity.values.get(*dimension).is_finite() {
                    return Err(SnapshotError::NonFiniteValue {
                        id: entity.id.clone(),
                        dimension: dimension.to_string(),
                    }
                    .into());
                }
            }
        }

        let fingerprint = compute_fingerprint(&entities, &schema);
        Ok(Self {
            entities,
            schema,
            fingerprint,
            loaded_at: Utc::now(),
        })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn schema(&self) -> &SnapshotSchema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// blake3 hash of schema and content, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct cluster labels, sorted. Empty when the source has no cluster column.
    pub fn cluster_labels(&self) -> Vec<ClusterLabel> {
        self.entities
            .iter()
            .filter_map(|e| e.cluster.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn compute_fingerprint(entities: &[Entity], schema: &SnapshotSchema) -> String {
    let mut hasher = blake3::Hasher::new();
    for dimension in schema.dimensions() {
        hasher.update(dimension.as_str().as_bytes());
    }
    if let Some(column) = schema.cluster_column() {
        hasher.update(column.as_bytes());
    }
    for entity in entities {
        hasher.update(entity.id.as_bytes());
        hasher.update(&[0]);
        if let Some(label) = &entity.cluster {
            hasher.update(label.as_str().as_bytes());
        }
        hasher.update(&[0]);
        for (_, value) in entity.values.iter() {
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
