//! RecommendationEngine: implements IRecommender, runs the single pipeline.
//!
//! filter → bound check → empty check → resolve weights → normalize → score → select.
//! Weight resolution does not depend on filtering.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use habitat_core::config::HabitatConfig;
use habitat_core::errors::{HabitatError, HabitatResult};
use habitat_core::models::{AppliedRequest, ClusterLabel, Recommendation, RecommendationRequest};
use habitat_core::traits::IRecommender;
use habitat_observability::{recommendation_span, RequestLog, RequestLogEntry};
use tracing::{debug, info};

use crate::filter::ClusterFilter;
use crate::normalize::DimensionNormalizer;
use crate::scoring::ScoreAggregator;
use crate::selection::DiverseSelector;
use crate::store::SnapshotStore;
use crate::weights::WeightResolver;

/// The recommendation pipeline, parameterized by selection mode per request.
pub struct RecommendationEngine {
    store: Arc<SnapshotStore>,
    filter: ClusterFilter,
    normalizer: DimensionNormalizer,
    resolver: WeightResolver,
    selector: DiverseSelector,
    max_active_subset: usize,
    request_log: Mutex<RequestLog>,
}

impl RecommendationEngine {
    pub fn new(store: Arc<SnapshotStore>, config: &HabitatConfig) -> Self {
        Self {
            store,
            filter: ClusterFilter::new(config.selection.fallback),
            normalizer: DimensionNormalizer::new(),
            resolver: WeightResolver::new(&config.weights),
            selector: DiverseSelector::new(&config.selection),
            max_active_subset: config.selection.max_active_subset,
            request_log: Mutex::new(RequestLog::with_capacity(
                config.observability.request_log_capacity,
            )),
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Cluster labels a client can choose from, sorted.
    pub fn available_clusters(&self) -> Vec<ClusterLabel> {
        self.store.current().cluster_labels()
    }

    /// Copy of the log of served requests.
    pub fn request_log(&self) -> RequestLog {
        self.request_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl IRecommender for RecommendationEngine {
    fn recommend(&self, request: &RecommendationRequest) -> HabitatResult<Recommendation> {
        let snapshot = self.store.current();
        let span = recommendation_span!(request.mode, request.cluster);
        let _enter = span.enter();
        let started = Instant::now();

        // Step 1: Cluster filter (with fallback).
        let subset = self.filter.apply(&snapshot, &request.cluster);
        if subset.len() > self.max_active_subset {
            return Err(HabitatError::SubsetTooLarge {
                size: subset.len(),
                limit: self.max_active_subset,
            });
        }
        if subset.is_empty() {
            return Err(crate::selection::empty_subset());
        }
        debug!(
            active = subset.len(),
            fallback = subset.fallback_applied(),
            "active subset ready"
        );

        // Step 2: Weights.
        let weights = self.resolver.resolve_request(request);

        // Step 3: Normalize over the active subset.
        let normalized = self.normalizer.normalize(&subset)?;

        // Step 4: Composite index.
        let scored = ScoreAggregator::new(weights.shares).score(normalized);

        // Step 5: Select.
        let outcome = self
            .selector
            .select(request.mode, scored, &weights, request.limit)?;

        info!(
            results = outcome.len(),
            active = subset.len(),
            fallback = subset.fallback_applied(),
            parse_fallback = weights.parse_fallback,
            elapsed_us = started.elapsed().as_micros() as u64,
            "recommendation complete"
        );

        let recommendation = Recommendation {
            outcome,
            applied: AppliedRequest {
                cluster: request.cluster.clone(),
                fallback_applied: subset.fallback_applied(),
                active_subset_size: subset.len(),
                weights,
            },
            snapshot_fingerprint: snapshot.fingerprint().to_string(),
        };
        self.request_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(RequestLogEntry::from_recommendation(
                &recommendation,
                started.elapsed(),
            ));
        Ok(recommendation)
    }
}
