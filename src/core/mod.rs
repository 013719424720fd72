/*!
 * Core Module
 * Shared types and error definitions
 */

pub mod errors;
pub mod types;

pub use errors::SchedulerError;
pub use types::{BurstMs, Pid, Priority, SchedResult, SizeKb};
