//! Largest-remainder apportionment and round-robin sequencing.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use storyviz_models::SceneContext;

use crate::error::{AllocationError, ShotResult};
use crate::weights::WeightTable;

/// Integer shot count per label. Counts always sum to the requested total.
pub type AllocationResult = BTreeMap<String, usize>;

/// Apportion `total` shots across the labels of a normalized table.
///
/// Uses the largest-remainder method: floor each label's real-valued share,
/// then hand the leftover units one at a time to the labels with the largest
/// fractional remainder. Floor-only allocation systematically under-counts
/// and naive rounding can overshoot, so this is the only scheme that lands
/// on `total` exactly. Remainder ties break by ascending label so identical
/// inputs always apportion identically.
pub fn apportion(table: &WeightTable, total: usize) -> AllocationResult {
    let mut counts: AllocationResult = AllocationResult::new();
    let mut remainders: Vec<(String, f64)> = Vec::with_capacity(table.len());
    let mut allocated = 0usize;

    for (label, weight) in table.weights() {
        let share = weight * total as f64;
        let floor = share.floor() as usize;
        counts.insert(label.clone(), floor);
        remainders.push((label.clone(), share - floor as f64));
        allocated += floor;
    }

    remainders.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut leftover = total.saturating_sub(allocated);
    let mut cursor = 0usize;
    while leftover > 0 && !remainders.is_empty() {
        let label = &remainders[cursor % remainders.len()].0;
        *counts.get_mut(label).expect("label present in counts") += 1;
        leftover -= 1;
        cursor += 1;
    }

    counts
}

/// Interleave the apportioned counts into an ordered shot sequence.
///
/// Labels are ranked by descending adjusted weight (ties ascending label)
/// and the sequence is built by cycling through that ranking, emitting one
/// unit of each label that still has remaining count. Higher-weight types
/// appear earlier and more often; no type clusters needlessly when several
/// have nonzero counts.
pub fn sequence(table: &WeightTable, counts: &AllocationResult, total: usize) -> Vec<String> {
    let mut priority: Vec<(&String, f64)> = table
        .weights()
        .iter()
        .map(|(label, weight)| (label, *weight))
        .collect();
    priority.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut remaining = counts.clone();
    let mut shots = Vec::with_capacity(total);
    while shots.len() < total {
        let mut emitted = false;
        for (label, _) in &priority {
            if shots.len() == total {
                break;
            }
            if let Some(count) = remaining.get_mut(*label) {
                if *count > 0 {
                    *count -= 1;
                    shots.push((*label).clone());
                    emitted = true;
                }
            }
        }
        if !emitted {
            // Counts exhausted; only reachable if counts sum below total.
            break;
        }
    }

    shots
}

/// Compute the bias-adjusted shot count per label for a scene.
///
/// Fails with [`AllocationError::InvalidInput`] when `total` is negative;
/// `total == 0` yields an empty result.
pub fn allocate_counts(
    weights: &WeightTable,
    context: &SceneContext,
    total: i64,
) -> ShotResult<AllocationResult> {
    if total < 0 {
        return Err(AllocationError::InvalidInput(total));
    }
    let table = weights.biased(context.narrative_weight);
    Ok(apportion(&table, total as usize))
}

/// Produce an ordered shot-type sequence of length `total` for a scene.
///
/// Pure and deterministic: the label multiset always equals the
/// [`allocate_counts`] result for the same inputs, and repeated calls with
/// identical arguments return identical sequences.
pub fn allocate(
    weights: &WeightTable,
    context: &SceneContext,
    total: i64,
) -> ShotResult<Vec<String>> {
    if total < 0 {
        return Err(AllocationError::InvalidInput(total));
    }
    let total = total as usize;
    if total == 0 {
        return Ok(Vec::new());
    }

    let table = weights.biased(context.narrative_weight);
    let counts = apportion(&table, total);
    let shots = sequence(&table, &counts, total);
    debug!(
        total,
        types = counts.values().filter(|c| **c > 0).count(),
        narrative_weight = context.narrative_weight,
        "allocated shot sequence"
    );
    Ok(shots)
}
