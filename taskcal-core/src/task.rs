//! To-do items with a one-way completion flag.

use crate::id::uuid_id;

/// Maximum allowed task or event content length in characters.
pub const MAX_CONTENT_LENGTH: usize = 256;

uuid_id! {
    /// Unique identifier for a task, based on UUID v7 for time-ordering.
    TaskId
}

/// A to-do item.
///
/// `completed` only ever moves from `false` to `true`; completed tasks
/// leave the list through an archive, never by being reopened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique task identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Free-text description entered by the user.
    pub content: String,
    /// Whether the task has been checked off.
    pub completed: bool,
}

impl Task {
    /// Creates an open task with a fresh identifier.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
            completed: false,
        }
    }

    /// Marks the task completed.
    ///
    /// Returns `true` if the flag changed, `false` if it was already set.
    pub const fn complete(&mut self) -> bool {
        let changed = !self.completed;
        self.completed = true;
        changed
    }
}
