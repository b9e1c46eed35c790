//! Benefits section of the landing page

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BENEFITS: &[(&str, &str)] = &[
    (
        "방문자 2배 증가 전략",
        "검색 노출을 높이는 키워드 선정과 SEO 최적화 방법을 알려드립니다.",
    ),
    (
        "수익형 블로그의 비밀",
        "체험단, 제휴 마케팅으로 월 100만원 수익을 만드는 방법을 공개합니다.",
    ),
    (
        "충성 독자 확보",
        "꾸준한 방문자를 확보하는 콘텐츠 전략과 독자 관리 방법을 배웁니다.",
    ),
];

pub fn lines() -> Vec<Line<'static>> {
    let header = Style::default().add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(Color::Green);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("📚 이 전자책에서 배우는 ", header),
            Span::styled("핵심 포인트", accent.add_modifier(Modifier::BOLD)),
        ])
        .centered(),
        Line::default(),
    ];

    for (title, description) in BENEFITS {
        lines.push(Line::from(vec![
            Span::styled("  ● ", accent),
            Span::styled(*title, header),
        ]));
        lines.push(Line::from(format!("    {description}")));
        lines.push(Line::default());
    }

    lines
}
