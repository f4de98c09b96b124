//! Integration tests for the completion fanfare.
//!
//! # Verification Focus
//!
//! - Completing an open task shows the fanfare
//! - The fanfare hides once the configured duration elapses
//! - A second completion restarts the deadline instead of stacking timers
//! - Re-completing a completed task does not restart it

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskcal::app::App;
use taskcal::config::AppConfig;

fn make_app(duration_ms: u64) -> App {
    let config = AppConfig {
        fanfare_duration: Duration::from_millis(duration_ms),
        ..AppConfig::default()
    };
    App::new(&config, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

#[test]
fn completion_shows_then_hides_fanfare() {
    let mut app = make_app(1000);
    let task = app.planner.add_task("Ship it").unwrap();
    let t0 = Instant::now();

    assert!(app.complete_task(&task.id, t0).unwrap());
    assert!(app.fanfare.is_visible());

    app.tick(t0 + Duration::from_millis(500));
    assert!(app.fanfare.is_visible());

    app.tick(t0 + Duration::from_millis(1000));
    assert!(!app.fanfare.is_visible());
    assert!(app.planner.tasks()[0].completed, "flag outlives the animation");
}

#[test]
fn space_on_selected_task_triggers_fanfare() {
    let mut app = make_app(1000);
    app.planner.add_task("First").unwrap();
    app.planner.add_task("Second").unwrap();

    let t0 = Instant::now();
    app.handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), t0);
    app.handle_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), t0);

    assert!(!app.planner.tasks()[0].completed);
    assert!(app.planner.tasks()[1].completed);
    assert!(app.fanfare.is_visible());
}

#[test]
fn overlapping_completions_restart_single_timer() {
    let mut app = make_app(1000);
    let a = app.planner.add_task("A").unwrap();
    let b = app.planner.add_task("B").unwrap();
    let t0 = Instant::now();

    app.complete_task(&a.id, t0).unwrap();
    app.complete_task(&b.id, t0 + Duration::from_millis(700)).unwrap();

    app.tick(t0 + Duration::from_millis(1200));
    assert!(app.fanfare.is_visible(), "second completion extends the window");
    assert_eq!(
        app.fanfare.remaining(t0 + Duration::from_millis(1200)),
        Some(Duration::from_millis(500))
    );

    app.tick(t0 + Duration::from_millis(1700));
    assert!(!app.fanfare.is_visible());
}

#[test]
fn recompleting_does_not_restart() {
    let mut app = make_app(1000);
    let task = app.planner.add_task("Done already").unwrap();
    let t0 = Instant::now();

    app.complete_task(&task.id, t0).unwrap();
    app.tick(t0 + Duration::from_millis(1000));
    assert!(!app.fanfare.is_visible());

    assert!(!app.complete_task(&task.id, t0 + Duration::from_millis(1100)).unwrap());
    assert!(!app.fanfare.is_visible());
}

#[test]
fn archive_during_fanfare_leaves_it_running() {
    let mut app = make_app(1000);
    let task = app.planner.add_task("Quick").unwrap();
    let t0 = Instant::now();
    app.complete_task(&task.id, t0).unwrap();

    app.handle_key_event(
        KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
        t0 + Duration::from_millis(100),
    );
    assert!(app.planner.tasks().is_empty());
    assert!(app.fanfare.is_visible());
}
