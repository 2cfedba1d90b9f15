/// Contract violations between the snapshot provider, the config, and the core.
/// Never recovered: a request that hits one of these is aborted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("required dimension column '{dimension}' is missing from the snapshot schema")]
    MissingDimension { dimension: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
