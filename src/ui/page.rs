//! Scrollable page content shown above the signup form

use super::{benefits, hero, testimonials};
use crate::app::App;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Assembled page lines, in section order
fn lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.extend(hero::lines());
    lines.push(Line::default());
    lines.extend(benefits::lines());
    lines.extend(testimonials::lines());
    lines
}

/// Total page line count, used for scroll clamping
pub fn line_count() -> usize {
    lines().len()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new(lines())
        .wrap(Wrap { trim: false })
        .scroll((app.state.page_scroll, 0));
    frame.render_widget(paragraph, area);
}
