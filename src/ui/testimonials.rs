//! Testimonials section of the landing page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "이 책 읽고 키워드 설정 바꿨는데 조회수가 3배 올랐어요!",
        "김지영 블로거",
    ),
    (
        "수익형 블로그를 운영하는 공식이 이렇게 쉬운 거였다니! 감사합니다.",
        "박현우 블로거",
    ),
];

pub fn lines() -> Vec<Line<'static>> {
    let header = Style::default().add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(Color::Green);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("실제 블로거들의 ", header),
            Span::styled("성공 후기", accent.add_modifier(Modifier::BOLD)),
        ])
        .centered(),
        Line::default(),
    ];

    for (comment, name) in TESTIMONIALS {
        lines.push(Line::from(format!("  \"{comment}\"")));
        lines.push(Line::from(Span::styled(
            format!("    — {name}"),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    lines
}
