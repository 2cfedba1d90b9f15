//! Mode B: greedy round-robin diverse pick.
//!
//! Walks dimensions in priority order and, for each, takes the not-yet-picked
//! entity with the highest raw value on that dimension. Each pick is tagged
//! with the dimension it won.

use std::collections::HashSet;

use habitat_core::errors::HabitatResult;
use habitat_core::models::{Dimension, DiversePick, StandoutEntity};

use crate::scoring::ScoredRow;

/// Pick up to `target` standouts, one per dimension of `priority`.
///
/// Ties on a raw value go to the row that came first in the subset, which
/// matches a stable descending sort followed by taking the head. A result
/// shorter than `target` is valid.
pub fn select(
    rows: &[ScoredRow<'_>],
    priority: Vec<Dimension>,
    target: usize,
) -> HabitatResult<DiversePick> {
    if rows.is_empty() {
        return Err(super::empty_subset());
    }

    let mut excluded: HashSet<&str> = HashSet::new();
    let mut picks = Vec::with_capacity(target.min(priority.len()));

    for &dimension in &priority {
        if picks.len() >= target {
            break;
        }

        let best = rows
            .iter()
            .filter(|row| !excluded.contains(row.entity.id.as_str()))
            .fold(None::<&ScoredRow<'_>>, |best, row| match best {
                Some(b) if b.entity.values.get(dimension) >= row.entity.values.get(dimension) => {
                    Some(b)
                }
                _ => Some(row),
            });

        let Some(row) = best else {
            continue;
        };

        excluded.insert(row.entity.id.as_str());
        picks.push(StandoutEntity {
            entity: row.entity.clone(),
            standout_dimension: dimension,
            standout_value: row.entity.values.get(dimension),
            composite_index: row.composite_index,
        });
    }

    Ok(DiversePick {
        picks,
        target,
        priority,
    })
}
