//! Add-item modal: kind chooser, draft fields, and submission.
//!
//! Closing the modal keeps the draft and the chosen kind; only a successful
//! submit resets them. Both kinds share the content field.

use chrono::NaiveDateTime;
use taskcal_core::datetime::{format_field, now_minute};
use taskcal_core::event::Event;
use taskcal_core::task::Task;
use thiserror::Error;

use crate::planner::{Planner, PlannerError};

/// What the modal will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A to-do item.
    Task,
    /// A timed calendar event.
    Event,
}

/// Editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Task content or event title.
    Content,
    /// Event start (`YYYY-MM-DDTHH:MM`).
    Start,
    /// Event end (`YYYY-MM-DDTHH:MM`).
    End,
}

/// Errors returned when submitting the modal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModalError {
    /// Neither task nor event has been chosen yet.
    #[error("choose task or event first")]
    NoKindSelected,
    /// The planner rejected the draft.
    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// An item the modal created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewItem {
    /// A task was appended.
    Task(Task),
    /// An event was appended.
    Event(Event),
}

/// In-progress form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Task content or event title.
    pub content: String,
    /// Event start text.
    pub start: String,
    /// Event end text.
    pub end: String,
}

impl Draft {
    /// Empty content with start and end both set to `now`.
    #[must_use]
    pub fn fresh(now: NaiveDateTime) -> Self {
        let stamp = format_field(now);
        Self {
            content: String::new(),
            start: stamp.clone(),
            end: stamp,
        }
    }

    fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Content => &self.content,
            DraftField::Start => &self.start,
            DraftField::End => &self.end,
        }
    }

    const fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Content => &mut self.content,
            DraftField::Start => &mut self.start,
            DraftField::End => &mut self.end,
        }
    }
}

/// Modal state.
#[derive(Debug, Clone)]
pub struct AddModal {
    /// Whether the modal is shown.
    pub visible: bool,
    /// Chosen kind, if any.
    pub kind: Option<ItemKind>,
    /// Draft contents.
    pub draft: Draft,
    /// Field receiving input.
    pub field: DraftField,
    /// Cursor position in the focused field (character index).
    pub cursor: usize,
}

impl AddModal {
    /// Creates a hidden modal with a fresh draft stamped at `now`.
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            visible: false,
            kind: None,
            draft: Draft::fresh(now),
            field: DraftField::Content,
            cursor: 0,
        }
    }

    /// Shows the modal without touching the draft.
    pub const fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the modal, keeping the draft and chosen kind.
    pub const fn close(&mut self) {
        self.visible = false;
    }

    /// Chooses what to create. Focus moves to the content field.
    pub fn choose(&mut self, kind: ItemKind) {
        self.kind = Some(kind);
        self.focus_field(DraftField::Content);
    }

    /// Fields shown for the current kind, in tab order.
    #[must_use]
    pub const fn fields(&self) -> &'static [DraftField] {
        match self.kind {
            None => &[],
            Some(ItemKind::Task) => &[DraftField::Content],
            Some(ItemKind::Event) => &[DraftField::Content, DraftField::Start, DraftField::End],
        }
    }

    /// Focuses the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.step_field(1);
    }

    /// Focuses the previous field, wrapping around.
    pub fn prev_field(&mut self) {
        self.step_field(-1);
    }

    /// Focuses `field` with the cursor at its end.
    pub fn focus_field(&mut self, field: DraftField) {
        self.field = field;
        self.cursor = self.draft.field(field).chars().count();
    }

    /// Text of the focused field.
    #[must_use]
    pub fn focused_text(&self) -> &str {
        self.draft.field(self.field)
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if self.kind.is_none() {
            return;
        }
        let cursor = self.cursor;
        let text = self.draft.field_mut(self.field);
        let at = byte_index(text, cursor);
        text.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.kind.is_none() || self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let text = self.draft.field_mut(self.field);
        let at = byte_index(text, cursor - 1);
        text.remove(at);
        self.cursor -= 1;
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.kind.is_none() {
            return;
        }
        let cursor = self.cursor;
        let text = self.draft.field_mut(self.field);
        if cursor < text.chars().count() {
            let at = byte_index(text, cursor);
            text.remove(at);
        }
    }

    /// Moves the cursor left.
    pub const fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.focused_text().chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of the field.
    pub const fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the field.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.focused_text().chars().count();
    }

    /// Validates the draft and appends it to `planner`.
    ///
    /// On success the modal closes and resets, with the new draft stamped
    /// at `now`. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::NoKindSelected`] before a kind is chosen, or
    /// the planner's validation error.
    pub fn submit(
        &mut self,
        planner: &mut Planner,
        now: NaiveDateTime,
    ) -> Result<NewItem, ModalError> {
        let item = match self.kind {
            None => return Err(ModalError::NoKindSelected),
            Some(ItemKind::Task) => NewItem::Task(planner.add_task(&self.draft.content)?),
            Some(ItemKind::Event) => NewItem::Event(planner.add_event_from_fields(
                &self.draft.content,
                &self.draft.start,
                &self.draft.end,
            )?),
        };
        self.reset(now);
        Ok(item)
    }

    /// Hides the modal, clears the kind, and starts a fresh draft.
    pub fn reset(&mut self, now: NaiveDateTime) {
        *self = Self::new(now);
    }

    fn step_field(&mut self, step: isize) {
        let fields = self.fields();
        if fields.is_empty() {
            return;
        }
        let current = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        let next = current.cast_signed() + step;
        let next = next.rem_euclid(fields.len().cast_signed()).cast_unsigned();
        self.focus_field(fields[next]);
    }
}

impl Default for AddModal {
    fn default() -> Self {
        Self::new(now_minute())
    }
}

/// Byte offset of the `char_idx`-th character, or the end of `text`.
fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}
