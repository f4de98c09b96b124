//! Add-item modal rendering (kind chooser + draft fields).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect, theme};
use crate::app::App;
use crate::modal::{AddModal, DraftField, ItemKind};

/// Render the modal centred over `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let modal = &app.modal;

    let mut lines = vec![kind_chooser(modal), Line::raw("")];

    match modal.kind {
        None => lines.push(Line::from(Span::styled(
            "Press t for a task or e for an event.",
            theme::dimmed(),
        ))),
        Some(kind) => {
            let label = match kind {
                ItemKind::Task => "Task ",
                ItemKind::Event => "Title",
            };
            lines.push(field_line(modal, DraftField::Content, label));
            if kind == ItemKind::Event {
                lines.push(field_line(modal, DraftField::Start, "Start"));
                lines.push(field_line(modal, DraftField::End, "End  "));
            }
        }
    }

    if let Some(notice) = &app.notice {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            notice.as_str(),
            theme::normal().fg(theme::WARNING),
        )));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = centered_rect(area, 60, height);

    let block = Block::default()
        .title(Span::styled("Add item", theme::bold()))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn kind_chooser(modal: &AddModal) -> Line<'static> {
    let button = |kind: ItemKind, text: &'static str| {
        if modal.kind == Some(kind) {
            Span::styled(text, theme::selected())
        } else {
            Span::styled(text, theme::normal())
        }
    };
    Line::from(vec![
        button(ItemKind::Task, "[ Task ]"),
        Span::raw("  "),
        button(ItemKind::Event, "[ Event ]"),
    ])
}

fn field_line<'a>(modal: &'a AddModal, field: DraftField, label: &'static str) -> Line<'a> {
    let is_focused = modal.field == field;
    let text = match field {
        DraftField::Content => modal.draft.content.as_str(),
        DraftField::Start => modal.draft.start.as_str(),
        DraftField::End => modal.draft.end.as_str(),
    };

    let label_style = if is_focused {
        theme::highlighted()
    } else {
        theme::dimmed()
    };
    let mut spans = vec![Span::styled(label, label_style), Span::raw(": ")];

    if is_focused {
        // Split around the cursor and draw a block cursor between.
        let split = text
            .char_indices()
            .nth(modal.cursor)
            .map_or(text.len(), |(i, _)| i);
        let (before, after) = text.split_at(split);
        spans.push(Span::styled(before, theme::normal()));
        spans.push(Span::styled("█", theme::input_cursor()));
        spans.push(Span::styled(after, theme::normal()));
    } else if text.is_empty() && field == DraftField::Content {
        let placeholder = match modal.kind {
            Some(ItemKind::Event) => "Enter an event...",
            _ => "Enter a task...",
        };
        spans.push(Span::styled(placeholder, theme::dimmed()));
    } else {
        spans.push(Span::styled(text, theme::normal()));
    }

    Line::from(spans)
}
