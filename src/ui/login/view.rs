use crate::ui::login::{LoginState, MIN_PHONE_LEN};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, STATUS_OK};
use crate::ui::widgets::form_field;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const HINTS: &str = "Type digits │ Enter: Continue";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &LoginState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Níbbo",
            Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Abeokuta's logistics & errands super-app",
            Style::default().fg(MUTED_TEXT),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    lines.extend(form_field("Phone Number", &state.phone, true, false));

    let button = if state.can_continue() {
        Span::styled(
            "  [ Continue → ]",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("  [ Continue ]  enter at least {MIN_PHONE_LEN} digits"),
            Style::default().fg(MUTED_TEXT),
        )
    };
    lines.push(Line::from(button));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Serving Panseke, Kuto, Sapon and all of Abeokuta",
        Style::default().fg(HEADER_TEXT),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
