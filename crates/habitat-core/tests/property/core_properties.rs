use habitat_core::constants::{LEISURE_MAX, LEISURE_MIN, SHARE_SUM_TOLERANCE};
use habitat_core::models::{
    ClusterLabel, ClusterSelector, Dimension, DimensionValues, LeisureScale, WeightVector,
};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn integral_cluster_encodings_agree(n in -10_000i64..10_000) {
        let canonical = ClusterLabel::from_i64(n);
        prop_assert_eq!(Some(canonical.clone()), ClusterLabel::parse(&n.to_string()));
        prop_assert_eq!(Some(canonical.clone()), ClusterLabel::parse(&format!("{n}.0")));
        prop_assert_eq!(Some(canonical.clone()), ClusterLabel::from_value(&json!(n as f64)));
        prop_assert_eq!(Some(canonical), ClusterLabel::from_value(&json!(n.to_string())));
    }

    #[test]
    fn selector_parse_never_panics(raw in ".{0,12}") {
        let selector = ClusterSelector::parse(&raw);
        if raw.trim().is_empty() {
            prop_assert!(selector.is_any());
        }
    }

    #[test]
    fn leisure_always_lands_in_range(raw in any::<i64>()) {
        let scale = LeisureScale::new(raw);
        prop_assert!((LEISURE_MIN..=LEISURE_MAX).contains(&scale.value()));
        prop_assert!(scale.bonus() <= LEISURE_MAX / 2);
    }

    #[test]
    fn positive_weights_share_to_one(w in prop::array::uniform5(0.001f64..1_000.0)) {
        let weights = WeightVector(DimensionValues::from_fn(|d| w[d.index()]));
        let shares = weights.shares();
        prop_assert!((shares.sum() - 1.0).abs() < SHARE_SUM_TOLERANCE);
        for d in Dimension::ALL {
            prop_assert!(shares.get(d) > 0.0 && shares.get(d) <= 1.0);
        }
    }

    #[test]
    fn finite_weights_of_any_magnitude_share_to_one(
        w in prop::array::uniform5(prop::num::f64::POSITIVE | prop::num::f64::NORMAL),
    ) {
        let weights = WeightVector(DimensionValues::from_fn(|d| w[d.index()]));
        let shares = weights.shares();
        prop_assert!((shares.sum() - 1.0).abs() < SHARE_SUM_TOLERANCE);
        for d in Dimension::ALL {
            prop_assert!((0.0..=1.0).contains(&shares.get(d)));
        }
    }

    #[test]
    fn non_finite_numeric_text_keeps_its_label(raw in prop::sample::select(vec!["nan", "NaN", "inf", "-inf", "infinity", "1e400"])) {
        let label = ClusterLabel::parse(raw);
        prop_assert_eq!(label.map(|l| l.to_string()), Some(raw.to_string()));
    }

    #[test]
    fn priority_order_is_a_permutation(w in prop::array::uniform5(0u8..4)) {
        let weights = WeightVector(DimensionValues::from_fn(|d| f64::from(w[d.index()])));
        let order = weights.priority_order();
        let mut sorted = order.clone();
        sorted.sort();
        prop_assert_eq!(sorted, Dimension::ALL.to_vec());
        for pair in order.windows(2) {
            let (a, b) = (weights.get(pair[0]), weights.get(pair[1]));
            prop_assert!(a > b || (a == b && pair[0] < pair[1]));
        }
    }
}
