//! Raw weight parsing. Any unusable input fails the whole vector.

use std::collections::BTreeMap;

use habitat_core::errors::WeightInputError;
use habitat_core::models::{Dimension, DimensionValues, WeightVector};
use tracing::debug;

/// Parse raw weight strings into a vector.
///
/// Dimensions with no entry take `default_weight`. Keys that name no
/// dimension are ignored. The first unusable value aborts the parse.
pub fn parse_weights(
    raw: &BTreeMap<String, String>,
    default_weight: f64,
) -> Result<WeightVector, WeightInputError> {
    let mut values = DimensionValues::uniform(default_weight);
    for (key, text) in raw {
        let Ok(dimension) = key.parse::<Dimension>() else {
            debug!(key = %key, "ignoring weight for unknown dimension");
            continue;
        };
        values.set(dimension, parse_weight(dimension, text)?);
    }
    Ok(WeightVector(values))
}

fn parse_weight(dimension: Dimension, text: &str) -> Result<f64, WeightInputError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| WeightInputError::InvalidNumber {
            dimension: dimension.to_string(),
            raw: text.to_string(),
        })?;
    if !value.is_finite() {
        return Err(WeightInputError::NonFinite {
            dimension: dimension.to_string(),
            raw: text.to_string(),
        });
    }
    if value < 0.0 {
        return Err(WeightInputError::Negative {
            dimension: dimension.to_string(),
            value,
        });
    }
    Ok(value)
}
