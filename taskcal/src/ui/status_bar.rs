//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.modal.visible {
        "Ctrl-T: task | Ctrl-E: event | Tab: next field | Enter: add | Esc: close"
    } else {
        match app.focus {
            PanelFocus::Tasks => {
                "a: add | A: archive done | ↑↓/jk: select | Space: complete | Tab: calendar | q: quit"
            }
            PanelFocus::Calendar => {
                "a: add | ←→/hl: prev/next | t: today | m/w/d: view | Tab: tasks | q: quit"
            }
        }
    };

    let tasks = app.planner.tasks();
    let done = app.planner.completed_count();
    let counts = format!("{} open, {done} done", tasks.len() - done);

    let mut spans = vec![
        Span::styled("TaskCal v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::raw(counts),
        Span::raw(" | "),
    ];
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(notice.as_str(), theme::normal().fg(theme::WARNING)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(help_text, theme::dimmed()));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
