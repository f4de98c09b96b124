//! Titled time intervals shown on the calendar.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::id::uuid_id;

uuid_id! {
    /// Unique identifier for a calendar event, based on UUID v7.
    EventId
}

/// A calendar event in local wall-clock time.
///
/// Events are immutable once created. Callers constructing events from user
/// input are expected to have checked `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Unique event identifier (UUID v7, time-ordered).
    pub id: EventId,
    /// Title shown on the calendar.
    pub title: String,
    /// Start instant (inclusive).
    pub start: NaiveDateTime,
    /// End instant (exclusive, except for zero-length events).
    pub end: NaiveDateTime,
}

impl Event {
    /// Creates an event with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            start,
            end,
        }
    }

    /// Length of the event.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the event occupies any part of `day`.
    ///
    /// An event ending exactly at midnight does not spill into the next day.
    /// A zero-length event belongs to the day it sits on.
    #[must_use]
    pub fn touches_day(&self, day: NaiveDate) -> bool {
        let day_start = day.and_time(NaiveTime::MIN);
        let Some(next_day) = day.succ_opt() else {
            return self.start >= day_start;
        };
        let day_end = next_day.and_time(NaiveTime::MIN);

        if self.start == self.end {
            return self.start >= day_start && self.start < day_end;
        }
        self.start < day_end && self.end > day_start
    }
}
