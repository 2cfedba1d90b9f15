//! Data model: dimensions, entities, clusters, weights, requests and results.

pub mod cluster;
pub mod context;
pub mod dimension;
pub mod entity;
pub mod policy;
pub mod recommendation;
pub mod request;
pub mod weights;

pub use cluster::{ClusterLabel, ClusterSelector};
pub use context::{Environment, LeisureScale};
pub use dimension::{Dimension, DimensionValues, UnknownDimension};
pub use entity::Entity;
pub use policy::{FallbackPolicy, PriorityPolicy};
pub use recommendation::{
    AppliedRequest, DiversePick, RankedEntity, Recommendation, SelectionOutcome, StandoutEntity,
};
pub use request::{RecommendationRequest, SelectionMode};
pub use weights::{ResolvedWeights, ShareVector, WeightVector};
