//! # habitat-core
//!
//! Foundation crate for the Habitat livability ranking engine.
//! Defines all types, traits, errors, config, and constants, plus the
//! snapshot ingestion boundary where cluster labels are canonicalized.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod snapshot;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HabitatConfig;
pub use errors::{HabitatError, HabitatResult};
pub use models::{
    ClusterLabel, ClusterSelector, Dimension, DimensionValues, Entity, Environment,
    Recommendation, RecommendationRequest, ResolvedWeights, SelectionMode, ShareVector,
    WeightVector,
};
pub use snapshot::{Snapshot, SnapshotSchema};
