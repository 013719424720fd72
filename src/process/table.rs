/*!
 * Process Table
 * Fixed-capacity slot store owning the process records
 */

use super::types::ProcessRecord;
use crate::core::errors::SchedulerError;
use crate::core::types::SchedResult;
use log::debug;

/// Fixed-capacity ordered store of process records
///
/// Slots are contiguous and the slot count never changes after population;
/// reordering swaps record values by index. The table exclusively owns its
/// records.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    slots: Vec<ProcessRecord>,
    capacity: usize,
}

impl ProcessTable {
    /// Create an empty table with a declared capacity
    pub fn with_capacity(capacity: usize) -> SchedResult<Self> {
        if capacity == 0 {
            return Err(SchedulerError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Append a record into the last free slot
    ///
    /// The caller supplies pids 1..n in arrival order; no duplicate-pid check
    /// is performed.
    pub fn append(&mut self, record: ProcessRecord) -> SchedResult<()> {
        if self.slots.len() == self.capacity {
            return Err(SchedulerError::TableFull(self.capacity));
        }
        debug!(
            "Record {} ({}) appended at slot {}",
            record.pid,
            record.name,
            self.slots.len()
        );
        self.slots.push(record);
        Ok(())
    }

    /// Iterate the populated slots in positional order
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord> {
        self.slots.iter()
    }

    /// Current records in positional order
    pub fn records(&self) -> &[ProcessRecord] {
        &self.slots
    }

    pub(crate) fn records_mut(&mut self) -> &mut [ProcessRecord] {
        &mut self.slots
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Declared slot capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32) -> ProcessRecord {
        ProcessRecord::new(pid, format!("proc-{pid}"), 64, 10, 1)
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ProcessTable::with_capacity(0).unwrap_err(),
            SchedulerError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_append_preserves_order() {
        let mut table = ProcessTable::with_capacity(3).unwrap();
        for pid in 1..=3 {
            table.append(record(pid)).unwrap();
        }

        let pids: Vec<u32> = table.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert!(table.is_full());
    }

    #[test]
    fn test_append_past_capacity() {
        let mut table = ProcessTable::with_capacity(2).unwrap();
        table.append(record(1)).unwrap();
        table.append(record(2)).unwrap();

        assert_eq!(
            table.append(record(3)).unwrap_err(),
            SchedulerError::TableFull(2)
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut table = ProcessTable::with_capacity(2).unwrap();
        table.append(record(1)).unwrap();
        table.append(record(2)).unwrap();

        let first: Vec<u32> = table.iter().map(|r| r.pid).collect();
        let second: Vec<u32> = table.iter().map(|r| r.pid).collect();
        assert_eq!(first, second);
    }
}
