//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Success color (completed tasks, confirmations).
pub const SUCCESS: Color = Color::Green;

/// Warning color (notices).
pub const WARNING: Color = Color::Yellow;

/// Panel title color for the tasks panel.
pub const TASKS_TITLE: Color = Color::Green;

/// Panel title color for the calendar panel.
pub const CALENDAR_TITLE: Color = Color::Cyan;

/// Event chip color on the calendar.
pub const EVENT: Color = Color::LightBlue;

/// Fanfare colors, cycled by tilt.
pub const FANFARE_COLORS: [Color; 3] = [Color::LightYellow, Color::LightMagenta, Color::LightCyan];

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (metadata, days outside the focus month).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Completed task style (struck through, dimmed).
#[must_use]
pub fn completed() -> Style {
    dimmed().add_modifier(Modifier::CROSSED_OUT)
}

/// Event entry style on the calendar.
#[must_use]
pub fn event() -> Style {
    Style::default().fg(EVENT)
}

/// Style for today's date label.
#[must_use]
pub fn today() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(WARNING)
        .add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for the fanfare overlay at a given tilt (degrees).
#[must_use]
pub fn fanfare(rotate: f32) -> Style {
    let idx = if rotate > 5.0 {
        1
    } else if rotate < -5.0 {
        2
    } else {
        0
    };
    Style::default()
        .fg(FANFARE_COLORS[idx])
        .add_modifier(Modifier::BOLD)
}
