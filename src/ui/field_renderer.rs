//! Field rendering utilities for the signup form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field.
///
/// An empty field shows its placeholder dimmed; the active field gets a
/// highlighted border and a cursor. Fields render dimmed while disabled
/// (submission in flight).
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let border_style = if is_active && is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = if field.is_empty() {
        Line::from(vec![
            Span::styled(field.placeholder.clone(), Style::default().fg(Color::DarkGray)),
            cursor_span(is_active, is_enabled),
        ])
    } else {
        let value_style = if is_enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(field.value.clone(), value_style),
            cursor_span(is_active, is_enabled),
        ])
    };

    let title = if field.required {
        format!(" {} * ", field.name)
    } else {
        format!(" {} ", field.name)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn cursor_span(is_active: bool, is_enabled: bool) -> Span<'static> {
    if is_active && is_enabled {
        Span::styled("▌", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    }
}
