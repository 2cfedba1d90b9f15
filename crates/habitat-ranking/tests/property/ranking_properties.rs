use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use habitat_core::config::HabitatConfig;
use habitat_core::constants::SHARE_SUM_TOLERANCE;
use habitat_core::models::{
    ClusterLabel, ClusterSelector, Dimension, DimensionValues, Entity, RecommendationRequest,
    SelectionMode, SelectionOutcome, WeightVector,
};
use habitat_core::snapshot::{Snapshot, SnapshotSchema};
use habitat_core::traits::IRecommender;
use habitat_ranking::{ActiveSubset, DimensionNormalizer, RecommendationEngine, SnapshotStore};
use proptest::prelude::*;

/// Any finite value, including magnitudes near `f64::MAX`.
fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1_000.0f64..1_000.0,
        prop::num::f64::NORMAL | prop::num::f64::ZERO,
        prop::sample::select(vec![f64::MIN, -1e308, 1e308, f64::MAX]),
    ]
}

fn arb_values() -> impl Strategy<Value = DimensionValues> {
    prop::array::uniform5(arb_value()).prop_map(|v| DimensionValues::from_fn(|d| v[d.index()]))
}

/// Non-negative finite weight, including magnitudes near `f64::MAX`.
fn arb_weight() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..10.0,
        prop::num::f64::POSITIVE | prop::num::f64::NORMAL,
        prop::sample::select(vec![f64::MAX / 2.0, 1e308, f64::MAX]),
    ]
}

/// Values drawn from a tiny set, so ties are common.
fn arb_tied_values() -> impl Strategy<Value = DimensionValues> {
    prop::array::uniform5(0u8..3).prop_map(|v| DimensionValues::from_fn(|d| f64::from(v[d.index()])))
}

fn arb_snapshot(values: impl Strategy<Value = DimensionValues>) -> impl Strategy<Value = Snapshot> {
    prop::collection::vec((values, 1i64..4), 1..40).prop_map(|rows| {
        let entities = rows
            .into_iter()
            .enumerate()
            .map(|(i, (values, cluster))| {
                Entity::new(format!("e{i}"), Some(ClusterLabel::from_i64(cluster)), values)
            })
            .collect();
        Snapshot::new(entities, SnapshotSchema::complete(Some("cluster"))).unwrap()
    })
}

fn arb_weights() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::array::uniform5(arb_weight()).prop_map(|w| {
        Dimension::ALL
            .into_iter()
            .map(|d| (d.as_str().to_string(), w[d.index()].to_string()))
            .collect()
    })
}

fn arb_environment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("urban".to_string())),
        Just(Some("natural".to_string())),
        Just(Some("mixed".to_string())),
        Just(Some("volcanic".to_string())),
    ]
}

fn arb_request(mode: SelectionMode) -> impl Strategy<Value = RecommendationRequest> {
    (arb_weights(), arb_environment(), prop::option::of(-2i64..9), 0i64..5).prop_map(
        move |(weights, environment, leisure, cluster)| RecommendationRequest {
            cluster: if cluster == 0 {
                ClusterSelector::Any
            } else {
                ClusterSelector::Label(ClusterLabel::from_i64(cluster))
            },
            weights,
            environment,
            leisure,
            mode,
            limit: Some(usize::MAX),
        },
    )
}

fn engine(snapshot: Snapshot) -> RecommendationEngine {
    RecommendationEngine::new(
        Arc::new(SnapshotStore::new(snapshot)),
        &HabitatConfig::default(),
    )
}

proptest! {
    #[test]
    fn normalized_values_stay_in_unit_range(snapshot in arb_snapshot(arb_values())) {
        let normalized = DimensionNormalizer::new()
            .normalize(&ActiveSubset::full(&snapshot))
            .unwrap();
        for row in &normalized.rows {
            for (_, v) in row.normalized.iter() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn shares_sum_to_one_unless_all_zero(w in prop::array::uniform5(arb_weight())) {
        let weights = WeightVector(DimensionValues::from_fn(|d| w[d.index()]));
        let sum = weights.shares().sum();
        if weights.sum() > 0.0 {
            prop_assert!((sum - 1.0).abs() < SHARE_SUM_TOLERANCE);
        } else {
            prop_assert_eq!(sum, 0.0);
        }
    }

    #[test]
    fn composites_stay_in_unit_range_at_any_magnitude(
        snapshot in arb_snapshot(arb_values()),
        request in arb_request(SelectionMode::Ranked),
    ) {
        let engine = engine(snapshot);
        let recommendation = engine.recommend(&request).unwrap();
        let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
            panic!("expected ranked outcome");
        };
        prop_assert!((recommendation.applied.weights.shares.sum() - 1.0).abs() < SHARE_SUM_TOLERANCE
            || recommendation.applied.weights.adjusted.sum() == 0.0);
        for row in rows {
            prop_assert!(row.composite_index >= 0.0 && row.composite_index <= 1.0 + 1e-12);
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[0].composite_index >= pair[1].composite_index);
        }
    }

    #[test]
    fn ranked_output_is_sorted_and_stable(
        snapshot in arb_snapshot(arb_tied_values()),
        request in arb_request(SelectionMode::Ranked),
    ) {
        let engine = engine(snapshot);
        let recommendation = engine.recommend(&request).unwrap();
        let SelectionOutcome::Ranked(rows) = &recommendation.outcome else {
            panic!("expected ranked outcome");
        };

        for row in rows {
            prop_assert!(row.composite_index >= -1e-12 && row.composite_index <= 1.0 + 1e-12);
        }
        let position = |id: &str| id[1..].parse::<usize>().unwrap();
        for pair in rows.windows(2) {
            prop_assert!(pair[0].composite_index >= pair[1].composite_index);
            if pair[0].composite_index == pair[1].composite_index {
                prop_assert!(position(&pair[0].entity.id) < position(&pair[1].entity.id));
            }
        }
        prop_assert_eq!(rows.len(), recommendation.applied.active_subset_size);
    }

    #[test]
    fn diverse_output_is_unique_and_bounded(
        snapshot in arb_snapshot(arb_tied_values()),
        request in arb_request(SelectionMode::Diverse),
    ) {
        let engine = engine(snapshot);
        let request = RecommendationRequest { limit: None, ..request };
        let recommendation = engine.recommend(&request).unwrap();
        let SelectionOutcome::Diverse(pick) = &recommendation.outcome else {
            panic!("expected diverse outcome");
        };

        let active = recommendation.applied.active_subset_size;
        prop_assert!(pick.len() <= 3.min(active));
        let ids: HashSet<&str> = pick.picks.iter().map(|p| p.entity.id.as_str()).collect();
        prop_assert_eq!(ids.len(), pick.len());
        let dims: HashSet<Dimension> = pick.picks.iter().map(|p| p.standout_dimension).collect();
        prop_assert_eq!(dims.len(), pick.len());
    }

    #[test]
    fn identical_inputs_give_identical_outputs(
        snapshot in arb_snapshot(arb_tied_values()),
        request in arb_request(SelectionMode::Diverse),
    ) {
        let engine = engine(snapshot);
        let first = engine.recommend(&request).unwrap();
        let second = engine.recommend(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn absent_cluster_keeps_original_row_count(snapshot in arb_snapshot(arb_values())) {
        let engine = engine(snapshot);
        let total = engine.store().current().len();
        let request = RecommendationRequest::new(SelectionMode::Ranked)
            .with_cluster(ClusterSelector::parse("99"))
            .with_limit(usize::MAX);
        let recommendation = engine.recommend(&request).unwrap();
        prop_assert!(recommendation.applied.fallback_applied);
        prop_assert_eq!(recommendation.outcome.len(), total);
    }
}
