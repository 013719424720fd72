/*!
 * Reordering Engine
 * In-place exchange sort driven by a pluggable discipline
 */

use super::discipline::Discipline;
use crate::process::types::ProcessRecord;
use serde::Serialize;

/// Comparison and exchange counts for one engine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SortMetrics {
    pub comparisons: u64,
    pub exchanges: u64,
}

/// Reorder `slots` into non-decreasing order under `discipline`
///
/// Exchange sort: n-1 passes of adjacent compare-and-swap. Record values move
/// between slots; the slot count and the pid set are untouched. Equal keys are
/// never exchanged, so the relative order of equal-keyed records is preserved
/// from whatever order held on entry. The full comparison schedule always
/// runs: a run over n slots performs exactly n*(n-1)/2 comparisons.
///
/// `slots.len() <= 1` is a no-op.
pub fn exchange_sort(slots: &mut [ProcessRecord], discipline: &dyn Discipline) -> SortMetrics {
    let mut metrics = SortMetrics::default();
    let n = slots.len();
    if n <= 1 {
        return metrics;
    }

    for pass in 0..n - 1 {
        for j in 0..n - 1 - pass {
            metrics.comparisons += 1;
            if discipline.out_of_order(&slots[j], &slots[j + 1]) {
                slots.swap(j, j + 1);
                metrics.exchanges += 1;
            }
        }
    }

    metrics
}
