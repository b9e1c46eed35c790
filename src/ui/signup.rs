//! Signup section: the lead capture form, submit button, and message region

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let submitting = app.state.submission.is_submitting();

    let block = Block::default()
        .title(" 지금 시작하세요! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // name
            Constraint::Length(3),             // email
            Constraint::Length(3),             // phone
            Constraint::Length(BUTTON_HEIGHT), // submit button
            Constraint::Length(1),             // message region
            Constraint::Length(1),             // privacy note
        ])
        .split(inner);

    for index in 0..3 {
        if let Some(field) = app.state.form.get_field(index) {
            let is_active = app.state.form.active_field_index == index;
            draw_field(frame, chunks[index], field, is_active, !submitting);
        }
    }

    let label = if submitting {
        "처리중..."
    } else {
        "무료 전자책 받기"
    };
    render_button(
        frame,
        chunks[3],
        label,
        app.state.form.is_button_row_active(),
        !submitting,
    );

    draw_message(frame, chunks[4], app);

    let note = Paragraph::new(Line::from(Span::styled(
        "* 입력하신 정보는 전자책 발송 목적으로만 사용됩니다.",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(note, chunks[5]);
}

/// Message region: a field hint takes precedence over the outcome message
fn draw_message(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(hint) = &app.state.field_hint {
        Line::from(Span::styled(
            hint.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        match app.state.submission {
            SubmissionState::Succeeded => Line::from(Span::styled(
                app.state.submission.message().unwrap_or_default(),
                Style::default().fg(Color::Green),
            )),
            SubmissionState::Failed => Line::from(Span::styled(
                app.state.submission.message().unwrap_or_default(),
                Style::default().fg(Color::Red),
            )),
            _ => Line::default(),
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
