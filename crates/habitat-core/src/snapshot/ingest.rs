use serde_json::{Map, Value};
use tracing::debug;

use super::{Snapshot, SnapshotSchema};
use crate::config::SnapshotConfig;
use crate::constants::ID_COLUMN_FALLBACKS;
use crate::errors::{HabitatResult, SnapshotError};
use crate::models::{ClusterLabel, Dimension, DimensionValues, Entity};

impl Snapshot {
    /// Build a snapshot from JSON object records, one per entity.
    ///
    /// A dimension column counts as present when any record carries it; every
    /// record must then hold a finite numeric value for it. Dimensions no
    /// record carries are left out of the schema and surface later as a
    /// configuration error, not here.
    pub fn from_records(records: &[Value], config: &SnapshotConfig) -> HabitatResult<Self> {
        let columns = resolve_dimension_columns(records, config);
        let cluster_column = records
            .iter()
            .filter_map(Value::as_object)
            .any(|obj| obj.contains_key(&config.cluster_column))
            .then(|| config.cluster_column.clone());

        let mut entities = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let obj = record.as_object().ok_or_else(|| SnapshotError::MalformedRecord {
                row,
                reason: "expected a JSON object".to_string(),
            })?;

            let id = read_id(obj, &config.id_column).ok_or_else(|| {
                SnapshotError::MalformedRecord {
                    row,
                    reason: format!("missing id column '{}'", config.id_column),
                }
            })?;

            let mut values = DimensionValues::default();
            for (dimension, column) in &columns {
                let value = read_number(obj.get(column.as_str())).ok_or_else(|| {
                    SnapshotError::MalformedRecord {
                        row,
                        reason: format!("'{column}' is missing or not numeric"),
                    }
                })?;
                if !value.is_finite() {
                    return Err(SnapshotError::NonFiniteValue {
                        id,
                        dimension: dimension.to_string(),
                    }
                    .into());
                }
                values.set(*dimension, value);
            }

            let cluster = cluster_column
                .as_deref()
                .and_then(|column| obj.get(column))
                .and_then(ClusterLabel::from_value);

            entities.push(Entity::new(id, cluster, values));
        }

        let schema = SnapshotSchema::new(columns.iter().map(|(d, _)| *d), cluster_column);
        debug!(
            entities = entities.len(),
            dimensions = schema.dimensions().len(),
            cluster_column = ?schema.cluster_column(),
            "snapshot records ingested"
        );
        Snapshot::new(entities, schema)
    }
}

/// Pick the source column for each dimension that at least one record carries.
fn resolve_dimension_columns(
    records: &[Value],
    config: &SnapshotConfig,
) -> Vec<(Dimension, String)> {
    let present = |column: &str| {
        records
            .iter()
            .filter_map(Value::as_object)
            .any(|obj| obj.contains_key(column))
    };

    Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let overridden = config
                .column_overrides
                .iter()
                .find(|(key, _)| key.parse::<Dimension>().ok() == Some(dimension))
                .map(|(_, column)| column.clone());
            let candidates = match overridden {
                Some(column) => vec![column],
                None => vec![
                    dimension.as_str().to_string(),
                    dimension.source_alias().to_string(),
                ],
            };
            candidates
                .into_iter()
                .find(|c| present(c))
                .map(|column| (dimension, column))
        })
        .collect()
}

fn read_id(obj: &Map<String, Value>, id_column: &str) -> Option<String> {
    std::iter::once(id_column)
        .chain(ID_COLUMN_FALLBACKS)
        .filter_map(|column| obj.get(column))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Numbers, or strings holding a number (CSV-derived records often carry both).
fn read_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
