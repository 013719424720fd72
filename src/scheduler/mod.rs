/*!
 * Scheduling Session
 * Fixed-capacity batch session with in-place policy application
 */

use crate::core::types::{BurstMs, Pid, Priority, SchedResult, SizeKb};
use crate::process::table::ProcessTable;
use crate::process::types::ProcessRecord;
use log::info;

pub mod discipline;
pub mod policy;
pub mod sort;
pub mod stats;

// Re-export public API
pub use discipline::{ByPriority, Discipline, FirstComeFirstServe, ShortestJobFirst};
pub use policy::Policy;
pub use sort::{exchange_sort, SortMetrics};
pub use stats::SessionStats;

/// Batch scheduling session
///
/// Owns a fixed-capacity process table, populated once by repeated insertion
/// and then reordered in place by successive policy applications. Each
/// application is independent; there is no persistent current-policy state.
#[derive(Debug, Clone)]
pub struct Session {
    table: ProcessTable,
    stats: SessionStats,
}

impl Session {
    /// Create a session with a declared record capacity
    pub fn new(capacity: usize) -> SchedResult<Self> {
        let table = ProcessTable::with_capacity(capacity)?;
        info!("Session created: capacity={}", capacity);

        Ok(Self {
            table,
            stats: SessionStats::new(capacity),
        })
    }

    /// Append one record, assigning the next arrival pid (1..n)
    ///
    /// The caller inserts exactly `capacity` records before sorting or
    /// display. `name` is expected to be non-empty.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        size_kb: SizeKb,
        burst_ms: BurstMs,
        priority: Priority,
    ) -> SchedResult<Pid> {
        let pid = self.table.len() as Pid + 1;
        let record = ProcessRecord::new(pid, name, size_kb, burst_ms, priority);

        self.table.append(record)?;
        self.stats.active_records = self.table.len();
        info!(
            "Process {} inserted (burst: {}ms, priority: {})",
            pid, burst_ms, priority
        );

        Ok(pid)
    }

    /// Reorder the records in place under the given policy
    pub fn apply(&mut self, policy: Policy) -> SortMetrics {
        let metrics = sort::exchange_sort(self.table.records_mut(), policy.discipline());
        self.stats.record_sort(policy, metrics);

        info!(
            "Policy {} applied: {} comparisons, {} exchanges",
            policy, metrics.comparisons, metrics.exchanges
        );
        metrics
    }

    /// Parse a policy name and apply it
    ///
    /// Unknown names are rejected and the table is left untouched.
    pub fn apply_named(&mut self, name: &str) -> SchedResult<SortMetrics> {
        let policy: Policy = name.parse()?;
        Ok(self.apply(policy))
    }

    /// Current records in positional order
    ///
    /// Order and values are the contract; formatting is the caller's concern.
    pub fn snapshot(&self) -> &[ProcessRecord] {
        self.table.records()
    }

    /// Iterate current records in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord> {
        self.table.iter()
    }

    /// Number of inserted records
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Declared record capacity
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Session statistics snapshot
    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SchedulerError;

    fn three_process_session() -> Session {
        let mut session = Session::new(3).unwrap();
        session.insert("editor", 120, 50, 3).unwrap();
        session.insert("daemon", 40, 20, 1).unwrap();
        session.insert("backup", 300, 80, 2).unwrap();
        session
    }

    fn pids(session: &Session) -> Vec<Pid> {
        session.iter().map(|r| r.pid).collect()
    }

    #[test]
    fn test_insert_assigns_arrival_pids() {
        let session = three_process_session();
        assert_eq!(pids(&session), vec![1, 2, 3]);
        assert!(session.is_full());
    }

    #[test]
    fn test_insert_past_capacity() {
        let mut session = three_process_session();
        assert_eq!(
            session.insert("extra", 1, 1, 1).unwrap_err(),
            SchedulerError::TableFull(3)
        );
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_priority_then_sjf() {
        let mut session = three_process_session();

        session.apply(Policy::Priority);
        assert_eq!(pids(&session), vec![2, 3, 1]);

        session.apply(Policy::ShortestJob);
        assert_eq!(pids(&session), vec![2, 1, 3]);
    }

    #[test]
    fn test_apply_named_rejects_unknown_policy() {
        let mut session = three_process_session();
        session.apply(Policy::Priority);
        let before: Vec<Pid> = pids(&session);

        let err = session.apply_named("lottery").unwrap_err();
        assert_eq!(err, SchedulerError::InvalidPolicy("lottery".to_string()));
        assert_eq!(pids(&session), before);
    }

    #[test]
    fn test_stats_tracking() {
        let mut session = three_process_session();
        assert_eq!(session.stats().sorts_applied, 0);
        assert_eq!(session.stats().active_records, 3);

        session.apply(Policy::ShortestJob);
        session.apply(Policy::FirstCome);

        let stats = session.stats();
        assert_eq!(stats.sorts_applied, 2);
        assert_eq!(stats.total_comparisons, 6);
        assert_eq!(stats.last_policy, Some(Policy::FirstCome));
    }
}
