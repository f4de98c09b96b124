//! Terminal UI rendering.

pub mod add_modal;
pub mod calendar_panel;
pub mod fanfare;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
};

use crate::app::App;

/// Main draw function for the entire UI.
///
/// `now` positions the fanfare animation.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    // Create main layout with status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let content_area = main_chunks[0];
    let status_area = main_chunks[1];

    // Two-column layout: task list, calendar
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33), // Tasks
            Constraint::Percentage(67), // Calendar
        ])
        .split(content_area);

    task_panel::render(frame, content_chunks[0], app);
    calendar_panel::render(frame, content_chunks[1], app);
    status_bar::render(frame, status_area, app);

    // Overlays, topmost last
    if app.modal.visible {
        add_modal::render(frame, frame.area(), app);
    }
    if let Some(anim) = app.fanfare.frame(now) {
        fanfare::render(frame, frame.area(), anim);
    }
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
