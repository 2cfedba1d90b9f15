//! Mode A: global top-K by composite index.

use habitat_core::errors::HabitatResult;
use habitat_core::models::RankedEntity;

use crate::scoring::ScoredRow;

/// Sort by composite index descending and keep the first `top_k`.
///
/// The sort is stable, so equal composites keep their input order.
pub fn select(mut rows: Vec<ScoredRow<'_>>, top_k: usize) -> HabitatResult<Vec<RankedEntity>> {
    if rows.is_empty() {
        return Err(super::empty_subset());
    }

    rows.sort_by(|a, b| {
        b.composite_index
            .partial_cmp(&a.composite_index)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(rows
        .into_iter()
        .take(top_k)
        .enumerate()
        .map(|(i, row)| RankedEntity {
            rank: i + 1,
            entity: row.entity.clone(),
            normalized: row.normalized,
            composite_index: row.composite_index,
        })
        .collect())
}
