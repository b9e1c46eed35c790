//! Hero section of the landing page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn lines() -> Vec<Line<'static>> {
    let title = Style::default().add_modifier(Modifier::BOLD);
    let accent = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    vec![
        Line::from(Span::styled("하루 10분 글쓰기!", title)).centered(),
        Line::from(vec![
            Span::styled("돈이 되는 네이버 블로그", accent),
            Span::styled(" 만들기", title),
        ])
        .centered(),
        Line::default(),
        Line::from("광고비 0원! 블로그만으로 월 100만원 수익 가능!").centered(),
        Line::default(),
        Line::from(Span::styled(
            "▼ 아래 양식을 작성하고 무료 전자책을 받으세요 ▼",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ]
}
