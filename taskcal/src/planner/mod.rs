//! In-memory planner state: the task list and the event calendar.
//!
//! All mutation goes through named operations on [`Planner`]. Input is
//! validated before anything is appended, so a rejected draft leaves both
//! lists untouched.

pub mod store;

pub use store::Planner;

use taskcal_core::datetime::DateTimeParseError;
use taskcal_core::task::TaskId;
use thiserror::Error;

/// Errors that can occur during planner operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    /// Content is empty or whitespace only.
    #[error("content cannot be empty")]
    ContentEmpty,
    /// Content exceeds the configured maximum length.
    #[error("content too long (max {max} characters)")]
    ContentTooLong {
        /// Limit that was exceeded.
        max: usize,
    },
    /// The event would end before it starts.
    #[error("event ends before it starts")]
    EndBeforeStart,
    /// The start field could not be parsed.
    #[error("start: {0}")]
    InvalidStart(DateTimeParseError),
    /// The end field could not be parsed.
    #[error("end: {0}")]
    InvalidEnd(DateTimeParseError),
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}
