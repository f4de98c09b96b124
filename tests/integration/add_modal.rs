//! Integration tests for the add-item flow driven by key events.
//!
//! # Verification Focus
//!
//! - Opening, choosing a kind, typing, and submitting creates one item
//! - Successful submit closes the modal and resets kind and draft
//! - Closing without submitting keeps the draft
//! - Invalid drafts keep the modal open and surface the error as a notice

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Instant;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskcal::app::App;
use taskcal::config::AppConfig;
use taskcal::modal::{DraftField, ItemKind, ModalError};
use taskcal::planner::PlannerError;
use taskcal_core::datetime::parse_field;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn make_app() -> App {
    App::new(
        &AppConfig::default(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
        Instant::now(),
    );
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Replaces the focused field's text by deleting it and typing `text`.
fn replace_field(app: &mut App, text: &str) {
    press(app, KeyCode::End);
    for _ in 0..app.modal.focused_text().chars().count() {
        press(app, KeyCode::Backspace);
    }
    type_text(app, text);
}

// =============================================================================
// Task creation
// =============================================================================

#[test]
fn add_task_through_keys() {
    let mut app = make_app();

    press(&mut app, KeyCode::Char('a'));
    assert!(app.modal.visible);
    assert_eq!(app.modal.kind, None);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.modal.kind, Some(ItemKind::Task));

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.planner.tasks().len(), 1);
    assert_eq!(app.planner.tasks()[0].content, "Buy milk");
    assert!(!app.planner.tasks()[0].completed);

    assert!(!app.modal.visible, "modal closes on success");
    assert_eq!(app.modal.kind, None, "kind resets on success");
    assert!(app.modal.draft.content.is_empty(), "draft resets on success");
    assert_eq!(app.notice.as_deref(), Some("Added task \"Buy milk\""));
}

#[test]
fn letters_t_and_e_are_text_once_kind_is_chosen() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "tee time");
    assert_eq!(app.modal.kind, Some(ItemKind::Event));
    assert_eq!(app.modal.draft.content, "tee time");
}

#[test]
fn ctrl_switches_kind_and_keeps_content() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    ctrl(&mut app, 'e');
    type_text(&mut app, "Review");
    ctrl(&mut app, 't');
    assert_eq!(app.modal.kind, Some(ItemKind::Task));
    assert_eq!(app.modal.draft.content, "Review");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.planner.tasks().len(), 1);
    assert!(app.planner.events().is_empty());
}

// =============================================================================
// Event creation
// =============================================================================

#[test]
fn add_event_through_keys() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "Standup");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.modal.field, DraftField::Start);
    replace_field(&mut app, "2024-01-01T09:00");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.modal.field, DraftField::End);
    replace_field(&mut app, "2024-01-01T09:15");

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.planner.events().len(), 1);
    let event = &app.planner.events()[0];
    assert_eq!(event.title, "Standup");
    assert_eq!(event.start, parse_field("2024-01-01T09:00").unwrap());
    assert_eq!(event.end, parse_field("2024-01-01T09:15").unwrap());
    assert!(app.planner.tasks().is_empty());
    assert!(!app.modal.visible);
}

#[test]
fn default_event_fields_are_valid() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "Right now");
    press(&mut app, KeyCode::Enter);

    // Fresh drafts start and end "now", a zero-length event.
    assert_eq!(app.planner.events().len(), 1);
    let event = &app.planner.events()[0];
    assert_eq!(event.start, event.end);
}

// =============================================================================
// Close and validation
// =============================================================================

#[test]
fn close_then_reopen_keeps_draft() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "Half-typed");
    press(&mut app, KeyCode::Esc);
    assert!(!app.modal.visible);
    assert!(!app.should_quit);
    assert!(app.planner.tasks().is_empty());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.modal.kind, Some(ItemKind::Task));
    assert_eq!(app.modal.draft.content, "Half-typed");
}

#[test]
fn submit_without_kind_keeps_modal_open() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.visible);
    assert_eq!(
        app.notice.as_deref(),
        Some(ModalError::NoKindSelected.to_string().as_str())
    );
}

#[test]
fn empty_task_is_rejected() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('t'));
    type_text(&mut app, "   ");

    let err = app.submit_modal().unwrap_err();
    assert_eq!(err, ModalError::Planner(PlannerError::ContentEmpty));
    assert!(app.modal.visible);
    assert!(app.planner.tasks().is_empty());
    assert_eq!(app.notice.as_deref(), Some("content cannot be empty"));
}

#[test]
fn end_before_start_is_rejected() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "Backwards");
    press(&mut app, KeyCode::Tab);
    replace_field(&mut app, "2024-01-01T10:00");
    press(&mut app, KeyCode::Tab);
    replace_field(&mut app, "2024-01-01T09:00");
    press(&mut app, KeyCode::Enter);

    assert!(app.planner.events().is_empty());
    assert!(app.modal.visible);
    assert_eq!(app.notice.as_deref(), Some("event ends before it starts"));
    assert_eq!(app.modal.draft.content, "Backwards");
}

#[test]
fn garbled_date_is_rejected() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "Mystery");
    press(&mut app, KeyCode::Tab);
    replace_field(&mut app, "next tuesday");
    press(&mut app, KeyCode::Enter);

    assert!(app.planner.events().is_empty());
    let notice = app.notice.clone().unwrap_or_default();
    assert!(notice.starts_with("start: invalid date-time"), "{notice}");
}
