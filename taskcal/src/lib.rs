//! `TaskCal`: terminal task list and calendar planner library.

pub mod app;
pub mod calendar;
pub mod config;
pub mod fanfare;
pub mod modal;
pub mod planner;
pub mod ui;
