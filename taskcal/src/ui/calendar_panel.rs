//! Calendar panel rendering (month grid, week columns, day agenda).

use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskcal_core::event::Event;

use super::theme;
use crate::app::{App, PanelFocus};
use crate::calendar::CalendarMode;

/// Render the calendar for the current view mode.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Calendar;

    let block = Block::default()
        .title(Span::styled(
            format!("Calendar ({})", app.calendar.mode),
            theme::panel_title(theme::CALENDAR_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(app.calendar.title(), theme::bold())));
    frame.render_widget(title, chunks[0]);

    let today = Local::now().date_naive();
    match app.calendar.mode {
        CalendarMode::Month => render_month(frame, chunks[1], app, today),
        CalendarMode::Week => render_week(frame, chunks[1], app, today),
        CalendarMode::Day => render_day(frame, chunks[1], app),
    }
}

/// Six rows of seven day cells.
fn render_month(frame: &mut Frame, area: Rect, app: &App, today: NaiveDate) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::once(Constraint::Length(1))
                .chain(std::iter::repeat_n(Constraint::Ratio(1, 6), 6)),
        )
        .split(area);

    let labels = app.calendar.weekday_labels();
    let label_cells = week_columns(rows[0]);
    for (label, cell) in labels.iter().zip(label_cells.iter()) {
        frame.render_widget(
            Paragraph::new(Span::styled(*label, theme::dimmed())),
            *cell,
        );
    }

    let days = app.calendar.visible_days();
    for (week, row) in days.chunks(7).zip(rows.iter().skip(1)) {
        let cells = week_columns(*row);
        for (day, cell) in week.iter().zip(cells.iter()) {
            let mut lines = vec![day_label(*day, app, today, &day.day().to_string())];
            let events = app.planner.events_on(*day);
            let room = usize::from(cell.height.saturating_sub(1));
            lines.extend(event_lines(&events, *day, room));
            frame.render_widget(Paragraph::new(lines), *cell);
        }
    }
}

/// Seven columns, one per day of the focus week.
fn render_week(frame: &mut Frame, area: Rect, app: &App, today: NaiveDate) {
    let days = app.calendar.visible_days();
    let cells = week_columns(area);
    for (day, cell) in days.iter().zip(cells.iter()) {
        let header = format!("{} {}", day.format("%a"), day.day());
        let mut lines = vec![day_label(*day, app, today, &header)];
        let events = app.planner.events_on(*day);
        let room = usize::from(cell.height.saturating_sub(1));
        lines.extend(event_lines(&events, *day, room));
        frame.render_widget(Paragraph::new(lines), *cell);
    }
}

/// Agenda of the focus day with full time ranges.
fn render_day(frame: &mut Frame, area: Rect, app: &App) {
    let day = app.calendar.focus;
    let events = app.planner.events_on(day);

    let lines: Vec<Line> = if events.is_empty() {
        vec![Line::from(Span::styled("No events", theme::dimmed()))]
    } else {
        events
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled(
                        format!("{} - {}", e.start.format("%H:%M"), e.end.format("%H:%M")),
                        theme::dimmed(),
                    ),
                    Span::raw("  "),
                    Span::styled(e.title.as_str(), theme::event()),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn week_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(std::iter::repeat_n(Constraint::Ratio(1, 7), 7))
        .split(area)
}

fn day_label<'a>(day: NaiveDate, app: &App, today: NaiveDate, text: &str) -> Line<'a> {
    let style = if day == today {
        theme::today()
    } else if day == app.calendar.focus {
        theme::highlighted()
    } else if app.calendar.in_focus_month(day) {
        theme::normal()
    } else {
        theme::dimmed()
    };
    Line::from(Span::styled(text.to_string(), style))
}

/// Up to `room` lines of events; the last line becomes "+N more" on overflow.
fn event_lines<'a>(events: &[&'a Event], day: NaiveDate, room: usize) -> Vec<Line<'a>> {
    if room == 0 {
        return Vec::new();
    }
    let overflow = events.len() > room;
    let shown = if overflow { room - 1 } else { events.len() };

    let mut lines: Vec<Line> = events
        .iter()
        .take(shown)
        .map(|&e| {
            let time = if e.start.date() == day {
                e.start.format("%H:%M").to_string()
            } else {
                "cont.".to_string()
            };
            Line::from(vec![
                Span::styled(time, theme::dimmed()),
                Span::raw(" "),
                Span::styled(e.title.as_str(), theme::event()),
            ])
        })
        .collect();

    if overflow {
        lines.push(Line::from(Span::styled(
            format!("+{} more", events.len() - shown),
            theme::dimmed(),
        )));
    }
    lines
}
