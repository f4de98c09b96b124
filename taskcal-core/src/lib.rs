//! Domain model shared by the `TaskCal` planner.
//!
//! Tasks, calendar events, their identifiers, and the `YYYY-MM-DDTHH:MM`
//! text format used by the event form.

pub mod datetime;
pub mod event;
mod id;
pub mod task;
