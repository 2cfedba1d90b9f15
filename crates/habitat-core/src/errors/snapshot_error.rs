/// Snapshot ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot from {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("duplicate entity id: {id}")]
    DuplicateId { id: String },

    #[error("non-finite value for {dimension} on entity {id}")]
    NonFiniteValue { id: String, dimension: String },
}
