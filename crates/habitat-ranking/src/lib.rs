//! # habitat-ranking
//!
//! The decision pipeline. Narrows the snapshot to the requested cluster,
//! normalizes each dimension over what is left, resolves user weights into
//! shares, scores every entity, and selects either a ranked list or a
//! diversified short-list.
//!
//! ## Architecture
//!
//! ```text
//! RecommendationEngine (IRecommender)
//! ├── SnapshotStore (Arc swap on reload)
//! ├── ClusterFilter
//! │   └── FallbackPolicy (unfiltered | strict)
//! ├── DimensionNormalizer (per-subset min-max)
//! ├── WeightResolver
//! │   ├── Parser (atomic reset on bad input)
//! │   └── ContextAdjustments (environment + leisure)
//! ├── ScoreAggregator (Σ share × normalized)
//! └── Selection
//!     ├── Ranked (stable top-K)
//!     └── Diverse (round-robin standouts)
//! ```

pub mod engine;
pub mod filter;
pub mod normalize;
pub mod scoring;
pub mod selection;
pub mod store;
pub mod weights;

pub use engine::RecommendationEngine;
pub use filter::{ActiveSubset, ClusterFilter};
pub use normalize::DimensionNormalizer;
pub use scoring::ScoreAggregator;
pub use selection::DiverseSelector;
pub use store::SnapshotStore;
pub use weights::WeightResolver;
