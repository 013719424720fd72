/*!
 * Session Statistics
 * Track and report reordering activity
 */

use super::policy::Policy;
use super::sort::SortMetrics;
use serde::Serialize;

/// Counters for one scheduling session
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionStats {
    pub capacity: usize,
    pub active_records: usize,
    pub sorts_applied: u64,
    pub total_comparisons: u64,
    pub total_exchanges: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_policy: Option<Policy>,
}

impl SessionStats {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub(super) fn record_sort(&mut self, policy: Policy, metrics: SortMetrics) {
        self.sorts_applied += 1;
        self.total_comparisons += metrics.comparisons;
        self.total_exchanges += metrics.exchanges;
        self.last_policy = Some(policy);
    }
}
