mod configuration_error;
mod snapshot_error;
mod weight_input_error;

pub use configuration_error::ConfigurationError;
pub use snapshot_error::SnapshotError;
pub use weight_input_error::WeightInputError;

/// Top-level error type for the Habitat engine.
#[derive(Debug, thiserror::Error)]
pub enum HabitatError {
    #[error("configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),

    #[error("data unavailable: {reason}")]
    DataUnavailable { reason: String },

    #[error("active subset too large: {size} entities exceeds limit {limit}")]
    SubsetTooLarge { size: usize, limit: usize },

    #[error("snapshot error: {0}")]
    SnapshotError(#[from] SnapshotError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type HabitatResult<T> = Result<T, HabitatError>;
