//! Rendering smoke tests against ratatui's `TestBackend`.
//!
//! Draws full frames and checks that the visible state (tasks, events,
//! modal, fanfare, notices) actually reaches the screen buffer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use ratatui::{Terminal, backend::TestBackend};
use taskcal::app::App;
use taskcal::calendar::CalendarMode;
use taskcal::config::AppConfig;
use taskcal::modal::ItemKind;
use taskcal::ui;

fn make_app() -> App {
    App::new(
        &AppConfig::default(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

/// Renders one frame and returns the screen as text, one line per row.
fn render(app: &App, now: Instant) -> String {
    render_sized(app, now, 180, 44)
}

fn render_sized(app: &App, now: Instant, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app, now)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn empty_app_shows_hint() {
    let app = make_app();
    let screen = render(&app, Instant::now());
    assert!(screen.contains("No tasks yet"));
    assert!(screen.contains("January 2024"));
    assert!(screen.contains("0 open, 0 done"));
}

#[test]
fn tasks_render_with_checkboxes() {
    let mut app = make_app();
    app.planner.add_task("Buy milk").unwrap();
    let walk = app.planner.add_task("Walk dog").unwrap();
    app.planner.complete_task(&walk.id).unwrap();

    let screen = render(&app, Instant::now());
    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("[✓] Walk dog"));
    assert!(screen.contains("1 open, 1 done"));
}

#[test]
fn events_render_in_each_view() {
    let mut app = make_app();
    app.planner
        .add_event_from_fields("Standup", "2024-01-01T09:00", "2024-01-01T09:15")
        .unwrap();

    let month = render(&app, Instant::now());
    assert!(month.contains("Standup"));

    app.calendar.set_mode(CalendarMode::Week);
    let week = render(&app, Instant::now());
    assert!(week.contains("Standup"));

    app.calendar.set_mode(CalendarMode::Day);
    let day = render(&app, Instant::now());
    assert!(day.contains("09:00 - 09:15"));
    assert!(day.contains("Standup"));
}

#[test]
fn modal_renders_fields_for_event() {
    let mut app = make_app();
    app.open_modal();
    let chooser = render(&app, Instant::now());
    assert!(chooser.contains("Add item"));
    assert!(chooser.contains("Press t for a task or e for an event."));

    app.modal.choose(ItemKind::Event);
    let form = render(&app, Instant::now());
    assert!(form.contains("Title"));
    assert!(form.contains("Start"));
    assert!(form.contains(&app.modal.draft.end));
}

#[test]
fn fanfare_overlay_appears_mid_animation() {
    let mut app = make_app();
    let task = app.planner.add_task("Celebrate").unwrap();
    let t0 = Instant::now();
    app.complete_task(&task.id, t0).unwrap();

    let screen = render(&app, t0 + Duration::from_millis(200));
    assert!(screen.contains("Task complete!"));

    app.tick(t0 + Duration::from_millis(1000));
    let after = render(&app, t0 + Duration::from_millis(1000));
    assert!(!after.contains("Task complete!"));
}

#[test]
fn notice_reaches_status_bar() {
    let mut app = make_app();
    app.archive_completed();
    let screen = render(&app, Instant::now());
    assert!(screen.contains("Nothing to archive"));
}

#[test]
fn task_list_scrolls_to_keep_selection_visible() {
    let mut app = make_app();
    for i in 0..40 {
        app.planner.add_task(&format!("Task {i:02}")).unwrap();
    }
    app.selected_task = 39;

    let screen = render_sized(&app, Instant::now(), 120, 20);
    assert!(screen.contains("Task 39"), "{screen}");
    assert!(!screen.contains("Task 00"), "{screen}");

    app.selected_task = 0;
    let screen = render_sized(&app, Instant::now(), 120, 20);
    assert!(screen.contains("Task 00"), "{screen}");
}
