//! Task panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list with checkboxes.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let tasks = app.planner.tasks();

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if tasks.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one.",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let checkbox = if task.completed { "[✓]" } else { "[ ]" };
            let style = if task.completed {
                theme::completed()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(checkbox, if task.completed {
                    theme::normal().fg(theme::SUCCESS)
                } else {
                    theme::normal()
                }),
                Span::raw(" "),
                Span::styled(task.content.as_str(), style),
            ]);

            let item = ListItem::new(line);
            if is_focused && idx == app.selected_task {
                item.style(theme::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);

    // Scrolls the list so the selected row stays on screen.
    let mut state = ListState::default().with_selected(Some(app.selected_task));
    frame.render_stateful_widget(list, area, &mut state);
}
