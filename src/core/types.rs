/*!
 * Core Types
 * Common types used across the scheduler
 */

/// Process ID type (arrival order, 1..n)
pub type Pid = u32;

/// Priority level (lower value = higher scheduling priority)
pub type Priority = i32;

/// CPU burst length in milliseconds
pub type BurstMs = u64;

/// Process image size in kilobytes
pub type SizeKb = u64;

/// Common result type for scheduler operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
