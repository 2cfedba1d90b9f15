//! DimensionNormalizer: min-max normalization over the active subset.
//!
//! Ranges come from the subset, not the full snapshot, so composite indices
//! from different cluster selections are not comparable.

mod range;

pub use range::DimensionRange;

use habitat_core::errors::{ConfigurationError, HabitatResult};
use habitat_core::models::{Dimension, DimensionValues, Entity};

use crate::filter::ActiveSubset;

/// A subset row with its normalized values.
#[derive(Debug, Clone)]
pub struct NormalizedRow<'a> {
    pub entity: &'a Entity,
    /// Every value in [0, 1].
    pub normalized: DimensionValues,
}

/// The active subset augmented with one normalized column per dimension.
#[derive(Debug, Clone)]
pub struct NormalizedSubset<'a> {
    pub rows: Vec<NormalizedRow<'a>>,
    /// Range each dimension was normalized against, in canonical order.
    pub ranges: [DimensionRange; Dimension::COUNT],
}

impl<'a> NormalizedSubset<'a> {
    pub fn range(&self, dimension: Dimension) -> DimensionRange {
        self.ranges[dimension.index()]
    }
}

/// Stateless per-subset min-max normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionNormalizer;

impl DimensionNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize every dimension over `subset`.
    ///
    /// Fails fast if the snapshot schema lacks any dimension column. An empty
    /// subset yields no rows and degenerate ranges.
    pub fn normalize<'a>(&self, subset: &ActiveSubset<'a>) -> HabitatResult<NormalizedSubset<'a>> {
        if let Some(missing) = subset.schema().missing_dimensions().first() {
            return Err(ConfigurationError::MissingDimension {
                dimension: missing.to_string(),
            }
            .into());
        }

        let ranges = Dimension::ALL.map(|d| {
            DimensionRange::from_values(subset.rows().iter().map(|e| e.values.get(d)))
        });

        let rows = subset
            .rows()
            .iter()
            .map(|&entity| NormalizedRow {
                entity,
                normalized: DimensionValues::from_fn(|d| {
                    ranges[d.index()].normalize(entity.values.get(d))
                }),
            })
            .collect();

        Ok(NormalizedSubset { rows, ranges })
    }
}
