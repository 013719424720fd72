/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Process table full: all {0} slots occupied")]
    #[diagnostic(
        code(sched::table_full),
        help("The table capacity is fixed at session creation. Declare a larger capacity up front.")
    )]
    TableFull(usize),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(sched::invalid_policy),
        help("Use priority, sjf, or fcfs.")
    )]
    InvalidPolicy(String),

    #[error("Invalid table capacity: {0}")]
    #[diagnostic(
        code(sched::invalid_capacity),
        help("A session must hold at least one process record.")
    )]
    InvalidCapacity(usize),
}
