//! Task and event store with validated creation and bulk archive.

use chrono::{NaiveDate, NaiveDateTime};
use taskcal_core::datetime::parse_field;
use taskcal_core::event::Event;
use taskcal_core::task::{MAX_CONTENT_LENGTH, Task, TaskId};

use super::PlannerError;

/// Owns the task list and the event list.
///
/// Tasks keep insertion order through every operation. Events are
/// append-only.
#[derive(Debug, Clone)]
pub struct Planner {
    tasks: Vec<Task>,
    events: Vec<Event>,
    max_content_len: usize,
}

impl Planner {
    /// Creates an empty planner with the default content limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            events: Vec::new(),
            max_content_len: MAX_CONTENT_LENGTH,
        }
    }

    /// Sets the maximum content length in characters.
    #[must_use]
    pub fn with_max_content_len(mut self, max: usize) -> Self {
        self.max_content_len = max;
        self
    }

    /// Appends a new open task.
    ///
    /// The content is stored as given; only the emptiness check ignores
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::ContentEmpty`] if the content is blank, or
    /// [`PlannerError::ContentTooLong`] if it exceeds the configured limit.
    pub fn add_task(&mut self, content: &str) -> Result<Task, PlannerError> {
        self.check_content(content)?;

        let task = Task::new(content);
        tracing::info!(task_id = %task.id, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Appends a new event. `start == end` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::ContentEmpty`] or
    /// [`PlannerError::ContentTooLong`] for a bad title, and
    /// [`PlannerError::EndBeforeStart`] if `end < start`.
    pub fn add_event(
        &mut self,
        title: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Event, PlannerError> {
        self.check_content(title)?;
        if end < start {
            return Err(PlannerError::EndBeforeStart);
        }

        let event = Event::new(title, start, end);
        tracing::info!(event_id = %event.id, %start, %end, "event added");
        self.events.push(event.clone());
        Ok(event)
    }

    /// Parses `YYYY-MM-DDTHH:MM` start/end fields and appends the event.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidStart`] / [`PlannerError::InvalidEnd`]
    /// for unparsable fields, otherwise the errors of
    /// [`add_event`](Self::add_event). The title is checked first.
    pub fn add_event_from_fields(
        &mut self,
        title: &str,
        start: &str,
        end: &str,
    ) -> Result<Event, PlannerError> {
        self.check_content(title)?;
        let start = parse_field(start).map_err(PlannerError::InvalidStart)?;
        let end = parse_field(end).map_err(PlannerError::InvalidEnd)?;
        self.add_event(title, start, end)
    }

    /// Marks a task completed.
    ///
    /// Returns `true` if the task was open and is now completed, `false` if
    /// it was already completed. Other tasks are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::TaskNotFound`] if no task has this ID.
    pub fn complete_task(&mut self, task_id: &TaskId) -> Result<bool, PlannerError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| &t.id == task_id)
            .ok_or_else(|| PlannerError::TaskNotFound(task_id.clone()))?;

        let changed = task.complete();
        if changed {
            tracing::info!(%task_id, "task completed");
        } else {
            tracing::debug!(%task_id, "task already completed");
        }
        Ok(changed)
    }

    /// Removes every completed task, keeping the order of the rest.
    ///
    /// Returns the number of tasks removed.
    pub fn archive_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let archived = before - self.tasks.len();
        tracing::info!(archived, remaining = self.tasks.len(), "archived completed tasks");
        archived
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up a task by ID.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    /// Number of completed tasks awaiting archive.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Events touching `day`, sorted by start time.
    #[must_use]
    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.touches_day(day)).collect();
        events.sort_by_key(|e| e.start);
        events
    }

    /// Validates task content or an event title.
    fn check_content(&self, content: &str) -> Result<(), PlannerError> {
        if content.trim().is_empty() {
            return Err(PlannerError::ContentEmpty);
        }
        if content.chars().count() > self.max_content_len {
            return Err(PlannerError::ContentTooLong {
                max: self.max_content_len,
            });
        }
        Ok(())
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
