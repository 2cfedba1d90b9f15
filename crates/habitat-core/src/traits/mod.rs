mod recommender;
mod snapshot_source;

pub use recommender::IRecommender;
pub use snapshot_source::ISnapshotSource;
