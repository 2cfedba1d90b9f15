use crate::errors::HabitatResult;
use crate::models::{Recommendation, RecommendationRequest};

/// Preference-weighted area recommendation.
pub trait IRecommender: Send + Sync {
    /// Serve one request against the current snapshot.
    fn recommend(&self, request: &RecommendationRequest) -> HabitatResult<Recommendation>;
}
