use std::sync::Arc;

use habitat_core::config::{HabitatConfig, SnapshotConfig};
use habitat_core::errors::{ConfigurationError, HabitatError};
use habitat_core::models::{
    ClusterLabel, ClusterSelector, Dimension, DimensionValues, Entity, FallbackPolicy,
    RecommendationRequest, SelectionMode, SelectionOutcome,
};
use habitat_core::snapshot::{Snapshot, SnapshotSchema};
use habitat_core::traits::IRecommender;
use habitat_ranking::{RecommendationEngine, SnapshotStore};
use serde_json::json;

fn engine_for(snapshot: Snapshot, config: &HabitatConfig) -> RecommendationEngine {
    RecommendationEngine::new(Arc::new(SnapshotStore::new(snapshot)), config)
}

fn fixture_engine() -> RecommendationEngine {
    let records = test_fixtures::load_records("golden/municipalities.json");
    let snapshot = Snapshot::from_records(&records, &SnapshotConfig::default()).unwrap();
    engine_for(snapshot, &HabitatConfig::default())
}

/// Only education and health weighted; every other dimension constant.
fn tie_request() -> RecommendationRequest {
    RecommendationRequest::new(SelectionMode::Ranked)
        .with_weight("education", "1")
        .with_weight("health", "1")
        .with_weight("economy", "0")
        .with_weight("transport", "0")
        .with_weight("housing", "0")
}

fn tie_snapshot() -> Snapshot {
    let a = DimensionValues {
        education: 0.0,
        health: 1.0,
        ..DimensionValues::uniform(3.0)
    };
    let b = DimensionValues {
        education: 1.0,
        health: 0.0,
        ..DimensionValues::uniform(3.0)
    };
    Snapshot::new(
        vec![Entity::new("A", None, a), Entity::new("B", None, b)],
        SnapshotSchema::complete(None),
    )
    .unwrap()
}

#[test]
fn equal_composites_keep_input_order() {
    let engine = engine_for(tie_snapshot(), &HabitatConfig::default());
    let recommendation = engine.recommend(&tie_request()).unwrap();

    let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
        panic!("expected ranked outcome");
    };
    assert_eq!(recommendation.outcome.ids(), ["A", "B"]);
    assert_eq!(rows[0].normalized.health, 1.0);
    assert_eq!(rows[0].normalized.education, 0.0);
    assert_eq!(rows[1].normalized.education, 1.0);
    for row in rows {
        assert!((row.composite_index - 0.5).abs() < 1e-12);
    }
}

#[test]
fn unparsable_weight_resets_every_weight() {
    let engine = engine_for(tie_snapshot(), &HabitatConfig::default());
    let request = tie_request().with_weight("education", "abc");
    let recommendation = engine.recommend(&request).unwrap();

    let weights = &recommendation.applied.weights;
    assert!(weights.parse_fallback);
    for dimension in Dimension::ALL {
        assert_eq!(weights.user.get(dimension), 1.0);
    }
    // Two of five equal shares are non-constant: 0.2 each.
    let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
        panic!("expected ranked outcome");
    };
    assert!((rows[0].composite_index - 0.2).abs() < 1e-12);
}

#[test]
fn absent_cluster_falls_back_to_full_dataset() {
    let engine = fixture_engine();
    let request = RecommendationRequest::new(SelectionMode::Ranked)
        .with_cluster(ClusterSelector::parse("9"))
        .with_limit(100);
    let recommendation = engine.recommend(&request).unwrap();

    assert!(recommendation.applied.fallback_applied);
    assert_eq!(recommendation.applied.active_subset_size, 12);
    assert_eq!(recommendation.outcome.len(), 12);
}

#[test]
fn strict_fallback_turns_absent_cluster_into_data_unavailable() {
    let records = test_fixtures::load_records("golden/municipalities.json");
    let snapshot = Snapshot::from_records(&records, &SnapshotConfig::default()).unwrap();
    let mut config = HabitatConfig::default();
    config.selection.fallback = FallbackPolicy::Strict;
    let engine = engine_for(snapshot, &config);

    let request =
        RecommendationRequest::new(SelectionMode::Diverse).with_cluster(ClusterSelector::parse("9"));
    assert!(matches!(
        engine.recommend(&request),
        Err(HabitatError::DataUnavailable { .. })
    ));
}

#[test]
fn cluster_filter_narrows_before_normalizing() {
    let engine = fixture_engine();
    let request = RecommendationRequest::new(SelectionMode::Ranked)
        .with_cluster(ClusterSelector::Label(ClusterLabel::from_i64(2)));
    let recommendation = engine.recommend(&request).unwrap();

    assert_eq!(recommendation.applied.active_subset_size, 4);
    let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
        panic!("expected ranked outcome");
    };
    assert!(rows
        .iter()
        .all(|r| r.entity.cluster == ClusterLabel::parse("2")));
    // Each dimension's best in the cluster normalizes to exactly 1.0.
    for dimension in Dimension::ALL {
        let max = rows
            .iter()
            .map(|r| r.normalized.get(dimension))
            .fold(f64::MIN, f64::max);
        assert_eq!(max, 1.0);
    }
}

#[test]
fn empty_snapshot_is_data_unavailable() {
    let snapshot = Snapshot::new(Vec::new(), SnapshotSchema::complete(None)).unwrap();
    let engine = engine_for(snapshot, &HabitatConfig::default());
    for mode in [SelectionMode::Ranked, SelectionMode::Diverse] {
        let err = engine.recommend(&RecommendationRequest::new(mode)).unwrap_err();
        assert!(matches!(err, HabitatError::DataUnavailable { .. }));
    }
}

#[test]
fn missing_dimension_column_fails_fast() {
    let records = vec![json!({
        "name": "x", "economy": 1, "education": 2, "health": 3, "transport": 4
    })];
    let snapshot = Snapshot::from_records(&records, &SnapshotConfig::default()).unwrap();
    let engine = engine_for(snapshot, &HabitatConfig::default());

    let err = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Ranked))
        .unwrap_err();
    assert!(matches!(
        err,
        HabitatError::ConfigurationError(ConfigurationError::MissingDimension { .. })
    ));
}

#[test]
fn oversized_subset_is_rejected_before_sorting() {
    let records = test_fixtures::load_records("golden/municipalities.json");
    let snapshot = Snapshot::from_records(&records, &SnapshotConfig::default()).unwrap();
    let mut config = HabitatConfig::default();
    config.selection.max_active_subset = 5;
    let engine = engine_for(snapshot, &config);

    let err = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Ranked))
        .unwrap_err();
    assert!(matches!(err, HabitatError::SubsetTooLarge { size: 12, limit: 5 }));

    // Cluster 2 has only four members and stays within the bound.
    let small = RecommendationRequest::new(SelectionMode::Ranked)
        .with_cluster(ClusterSelector::parse("2"));
    assert!(engine.recommend(&small).is_ok());
}

#[test]
fn diverse_pick_has_no_duplicates_and_at_most_three() {
    let engine = fixture_engine();
    let recommendation = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Diverse))
        .unwrap();
    let ids = recommendation.outcome.ids();
    assert_eq!(ids.len(), 3);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn diverse_pick_on_small_subset_is_short_but_valid() {
    let engine = engine_for(tie_snapshot(), &HabitatConfig::default());
    let recommendation = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Diverse))
        .unwrap();
    let SelectionOutcome::Diverse(pick) = &recommendation.outcome else {
        panic!("expected diverse outcome");
    };
    assert_eq!(pick.len(), 2);
    assert!(pick.is_short());
}

#[test]
fn identical_requests_give_identical_output() {
    let engine = fixture_engine();
    let request = RecommendationRequest::new(SelectionMode::Diverse)
        .with_environment("urban")
        .with_leisure(3);
    let first = engine.recommend(&request).unwrap();
    let second = engine.recommend(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn recommendation_echoes_applied_context() {
    let engine = fixture_engine();
    let request = RecommendationRequest::new(SelectionMode::Ranked)
        .with_cluster(ClusterSelector::parse("1"))
        .with_environment("natural")
        .with_leisure(2);
    let recommendation = engine.recommend(&request).unwrap();

    let applied = &recommendation.applied;
    assert_eq!(applied.cluster, ClusterSelector::parse("1"));
    assert!(!applied.fallback_applied);
    assert_eq!(
        applied.weights.environment,
        Some(habitat_core::Environment::Natural)
    );
    assert_eq!(
        recommendation.snapshot_fingerprint,
        engine.store().current().fingerprint()
    );
}

#[test]
fn available_clusters_are_sorted_canonical_labels() {
    let engine = fixture_engine();
    let labels: Vec<String> = engine
        .available_clusters()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, ["1", "2", "3"]);
}

#[test]
fn composite_indices_stay_in_unit_range() {
    let engine = fixture_engine();
    let request = RecommendationRequest::new(SelectionMode::Ranked)
        .with_weight("economy", "7")
        .with_environment("urban")
        .with_leisure(5)
        .with_limit(100);
    let recommendation = engine.recommend(&request).unwrap();
    let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
        panic!("expected ranked outcome");
    };
    assert!(rows
        .iter()
        .all(|r| (0.0..=1.0 + 1e-12).contains(&r.composite_index)));
}

#[test]
fn served_requests_are_logged() {
    let engine = fixture_engine();
    engine
        .recommend(&RecommendationRequest::new(SelectionMode::Ranked))
        .unwrap();
    engine
        .recommend(
            &RecommendationRequest::new(SelectionMode::Diverse)
                .with_cluster(ClusterSelector::parse("9")),
        )
        .unwrap();

    let log = engine.request_log();
    assert_eq!(log.count(), 2);
    assert_eq!(log.entries()[0].mode, SelectionMode::Ranked);
    assert_eq!(log.entries()[1].cluster, "9");
    assert!((log.fallback_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn empty_record_set_is_data_unavailable_not_missing_columns() {
    let snapshot = Snapshot::from_records(&[], &SnapshotConfig::default()).unwrap();
    let engine = engine_for(snapshot, &HabitatConfig::default());
    let err = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Ranked))
        .unwrap_err();
    assert!(matches!(err, HabitatError::DataUnavailable { .. }));
}

#[test]
fn extreme_finite_values_rank_inside_unit_range() {
    let entities = [("lo", -1e308), ("mid", 0.0), ("hi", 1e308)]
        .into_iter()
        .map(|(id, v)| Entity::new(id, None, DimensionValues::uniform(v)))
        .collect();
    let snapshot = Snapshot::new(entities, SnapshotSchema::complete(None)).unwrap();
    let engine = engine_for(snapshot, &HabitatConfig::default());

    let recommendation = engine
        .recommend(&RecommendationRequest::new(SelectionMode::Ranked))
        .unwrap();
    let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
        panic!("expected ranked outcome");
    };
    assert_eq!(recommendation.outcome.ids(), ["hi", "mid", "lo"]);
    assert!((rows[0].composite_index - 1.0).abs() < 1e-12);
    assert!((rows[1].composite_index - 0.5).abs() < 1e-12);
    assert_eq!(rows[2].composite_index, 0.0);
}
