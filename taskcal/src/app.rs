//! Application state and event handling.
//!
//! [`App`] owns every piece of UI state: the planner, the add modal, the
//! calendar view, the fanfare timer, and panel focus. Key events are routed
//! to the modal while it is open and to the focused panel otherwise.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskcal_core::datetime::now_minute;
use taskcal_core::task::{Task, TaskId};

use crate::calendar::{CalendarMode, CalendarView};
use crate::config::AppConfig;
use crate::fanfare::Fanfare;
use crate::modal::{AddModal, ItemKind, ModalError, NewItem};
use crate::planner::{Planner, PlannerError};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Task list is focused (default).
    Tasks,
    /// Calendar is focused.
    Calendar,
}

/// Main application state.
pub struct App {
    /// Tasks and events.
    pub planner: Planner,
    /// Add-item modal.
    pub modal: AddModal,
    /// Calendar navigation state.
    pub calendar: CalendarView,
    /// Completion animation timer.
    pub fanfare: Fanfare,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected_task: usize,
    /// One-line message for the status bar.
    pub notice: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an empty application anchored on `today`.
    #[must_use]
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            planner: Planner::new().with_max_content_len(config.max_content_len),
            modal: AddModal::new(now_minute()),
            calendar: CalendarView::new(config.default_view, today, config.week_start),
            fanfare: Fanfare::new(config.fanfare_duration),
            focus: PanelFocus::Tasks,
            selected_task: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Handle a key event. `now` drives the fanfare on completion.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if self.modal.visible {
            self.handle_modal_key(key);
            return;
        }

        // Global shortcuts
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('a') => {
                self.open_modal();
                return;
            }
            KeyCode::Char('A') => {
                self.archive_completed();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Tasks => self.handle_tasks_key(key, now),
            PanelFocus::Calendar => self.handle_calendar_key(key),
        }
    }

    /// Advance timers. Call on every frame tick.
    pub fn tick(&mut self, now: Instant) {
        self.fanfare.tick(now);
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.next_task(),
            KeyCode::Enter | KeyCode::Char(' ') => self.complete_selected(now),
            _ => {}
        }
    }

    /// Handle key event when the calendar is focused.
    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.calendar.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.calendar.next(),
            KeyCode::Char('t') => self.calendar.today(Local::now().date_naive()),
            KeyCode::Char('m') => self.calendar.set_mode(CalendarMode::Month),
            KeyCode::Char('w') => self.calendar.set_mode(CalendarMode::Week),
            KeyCode::Char('d') => self.calendar.set_mode(CalendarMode::Day),
            _ => {}
        }
    }

    /// Handle key event while the add modal is open.
    fn handle_modal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.modal.close(),
            KeyCode::Char('t') if ctrl => self.modal.choose(ItemKind::Task),
            KeyCode::Char('e') if ctrl => self.modal.choose(ItemKind::Event),
            KeyCode::Char('t') if self.modal.kind.is_none() => self.modal.choose(ItemKind::Task),
            KeyCode::Char('e') if self.modal.kind.is_none() => self.modal.choose(ItemKind::Event),
            KeyCode::BackTab => self.modal.prev_field(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.modal.prev_field(),
            KeyCode::Tab => self.modal.next_field(),
            KeyCode::Enter => self.submit_from_key(),
            KeyCode::Char(c) if !ctrl => self.modal.insert_char(c),
            KeyCode::Backspace => self.modal.backspace(),
            KeyCode::Delete => self.modal.delete(),
            KeyCode::Left => self.modal.move_cursor_left(),
            KeyCode::Right => self.modal.move_cursor_right(),
            KeyCode::Home => self.modal.move_cursor_home(),
            KeyCode::End => self.modal.move_cursor_end(),
            _ => {}
        }
    }

    /// Show the add modal.
    pub fn open_modal(&mut self) {
        self.modal.open();
        self.notice = None;
    }

    /// Enter in the modal. The outcome is reported through the notice.
    fn submit_from_key(&mut self) {
        if let Ok(item) = self.submit_modal() {
            tracing::debug!(?item, "modal submitted");
        }
    }

    /// Submit the modal draft to the planner.
    ///
    /// On success the modal closes and the notice names the new item; on
    /// failure the modal stays open and the notice carries the error.
    ///
    /// # Errors
    ///
    /// Returns the [`ModalError`] that rejected the draft.
    pub fn submit_modal(&mut self) -> Result<NewItem, ModalError> {
        match self.modal.submit(&mut self.planner, now_minute()) {
            Ok(item) => {
                self.notice = Some(match &item {
                    NewItem::Task(task) => format!("Added task \"{}\"", task.content),
                    NewItem::Event(event) => format!("Added event \"{}\"", event.title),
                });
                Ok(item)
            }
            Err(e) => {
                tracing::warn!(error = %e, "draft rejected");
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Complete a task and start the fanfare if it was open.
    ///
    /// A task that was already done leaves the fanfare alone and says so
    /// in the notice.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::TaskNotFound`] for an unknown ID.
    pub fn complete_task(&mut self, task_id: &TaskId, now: Instant) -> Result<bool, PlannerError> {
        let changed = self.planner.complete_task(task_id)?;
        if changed {
            self.fanfare.trigger(now);
        } else {
            self.notice = Some("Task already completed".to_string());
        }
        Ok(changed)
    }

    /// Complete the selected task, if any.
    pub fn complete_selected(&mut self, now: Instant) {
        let Some(task_id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        if let Err(e) = self.complete_task(&task_id, now) {
            tracing::warn!(error = %e, "completion failed");
            self.notice = Some(e.to_string());
        }
    }

    /// Archive completed tasks and keep the selection in range.
    pub fn archive_completed(&mut self) -> usize {
        let archived = self.planner.archive_completed();
        self.clamp_selection();
        self.notice = Some(match archived {
            0 => "Nothing to archive".to_string(),
            1 => "Archived 1 task".to_string(),
            n => format!("Archived {n} tasks"),
        });
        archived
    }

    /// The task under the selection cursor.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.planner.tasks().get(self.selected_task)
    }

    /// Switch between the task list and the calendar.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Tasks => PanelFocus::Calendar,
            PanelFocus::Calendar => PanelFocus::Tasks,
        };
    }

    /// Select the previous task.
    const fn prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Select the next task.
    fn next_task(&mut self) {
        if self.selected_task < self.planner.tasks().len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_task = self
            .selected_task
            .min(self.planner.tasks().len().saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default(), Local::now().date_naive())
    }
}
