//! Carousel and role selection views.

use crate::domain::catalog::CAROUSEL_SLIDES;
use crate::domain::Role;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub const CAROUSEL_HINTS: &str = "Enter: Next │ s: Skip │ Esc: Back";
pub const ROLE_HINTS: &str = "↑/↓: Move │ Enter/1-3: Select │ Esc: Back";

pub fn render_carousel(frame: &mut Frame<'_>, area: Rect, slide: usize) {
    let Some(current) = CAROUSEL_SLIDES.get(slide) else {
        return;
    };
    let dots: String = (0..CAROUSEL_SLIDES.len())
        .map(|idx| if idx == slide { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let next_label = if slide + 1 == CAROUSEL_SLIDES.len() {
        "[ Get Started ]"
    } else {
        "[ Next → ]"
    };

    let lines = vec![
        Line::from(""),
        Line::from(current.icon).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            current.title,
            Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(current.description, Style::default().fg(HEADER_TEXT)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(current.detail, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(dots).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(next_label, Style::default().fg(NIBBO_ORANGE)))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_role_selection(frame: &mut Frame<'_>, area: Rect, focused: usize) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  How will you use Níbbo?",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, role) in Role::ALL.iter().enumerate() {
        let selected = idx == focused;
        let marker = if selected { "▶" } else { " " };
        let mut title = Line::from(vec![
            Span::styled(format!("  {marker} {}. ", idx + 1), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                role.as_str(),
                Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
            ),
        ]);
        let mut tagline = Line::from(Span::styled(
            format!("       {}", role.tagline()),
            Style::default().fg(HEADER_TEXT),
        ));
        if selected {
            title = title.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            tagline = tagline.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(title);
        lines.push(tagline);
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
