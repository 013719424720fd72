/*!
 * Process Types
 * The process record data model
 */

use crate::core::types::{BurstMs, Pid, Priority, SizeKb};
use serde::{Deserialize, Serialize};

/// A single batch process record
///
/// `pid` is the arrival order (1..n) and the uniqueness key. Sorting permutes
/// record values among slots; it never reassigns pids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: Pid,
    pub name: String,
    /// Image size in KB. Informational only; no discipline consults it.
    pub size_kb: SizeKb,
    pub burst_ms: BurstMs,
    /// Lower value = higher scheduling priority.
    pub priority: Priority,
}

impl ProcessRecord {
    pub fn new(
        pid: Pid,
        name: impl Into<String>,
        size_kb: SizeKb,
        burst_ms: BurstMs,
        priority: Priority,
    ) -> Self {
        Self {
            pid,
            name: name.into(),
            size_kb,
            burst_ms,
            priority,
        }
    }
}
