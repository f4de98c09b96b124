//! Fanfare overlay rendering.
//!
//! Terminals cannot rotate glyphs, so tilt selects a leaning figure and
//! scale shrinks the box around it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{centered_rect, theme};
use crate::fanfare::FanfareFrame;

/// Box size at full scale.
const FULL_WIDTH: f32 = 24.0;
const FULL_HEIGHT: f32 = 5.0;

/// Animation units per terminal row of vertical offset.
const UNITS_PER_ROW: f32 = 25.0;

/// Render the fanfare centred over `area`, offset and scaled by `anim`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render(frame: &mut Frame, area: Rect, anim: FanfareFrame) {
    let scale = anim.scale.clamp(0.0, 1.0);
    let width = (FULL_WIDTH * scale).round() as u16;
    let height = (FULL_HEIGHT * scale).round() as u16;
    if width < 5 || height < 3 {
        return;
    }

    let mut rect = centered_rect(area, width, height);
    let offset = (anim.y / UNITS_PER_ROW).round() as i32;
    let shifted = i32::from(rect.y) + offset;
    let max_y = i32::from(area.bottom().saturating_sub(rect.height));
    rect.y = u16::try_from(shifted.clamp(i32::from(area.y), max_y)).unwrap_or(rect.y);

    let figure = if anim.rotate > 5.0 {
        " \\o\\ "
    } else if anim.rotate < -5.0 {
        " /o/ "
    } else {
        " \\o/ "
    };

    let mut lines = vec![Line::from(figure)];
    if height >= 4 {
        lines.push(Line::from("Task complete!"));
    }

    let style = theme::fanfare(anim.rotate);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title("* * *");
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
