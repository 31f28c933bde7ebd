use crate::domain::money::format_naira;
use crate::ui::rider::{RiderField, RiderState, CURRENT_EARNINGS, DAILY_TARGET};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::{form_field, progress_bar};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SUMMARY_HINTS: &str = "o: Go online/offline │ e: Edit profile │ Ctrl+L: Logout";
const EDIT_HINTS: &str = "Tab: Next field │ ←/→: Change │ Enter: Save │ Esc: Cancel";

pub fn hints(state: &RiderState) -> &'static str {
    if state.editing {
        EDIT_HINTS
    } else {
        SUMMARY_HINTS
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &RiderState) {
    let status_color = if state.is_online {
        STATUS_OK
    } else {
        MUTED_TEXT
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("  [{}] ", state.user.initial()),
                Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                state.user.full_name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   {}", state.badge()), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::styled(
            format!("  ● {}", state.status_text()),
            Style::default().fg(status_color),
        )),
        Line::from(""),
    ];

    if state.editing {
        for (idx, field) in RiderField::ALL.iter().enumerate() {
            let (label, value) = match field {
                RiderField::VehicleType => ("Vehicle Type", state.draft.vehicle_type.as_str()),
                RiderField::Availability => ("Availability", state.draft.availability.as_str()),
            };
            lines.extend(form_field(label, value, idx == state.focus, true));
        }
        lines.push(Line::from(vec![
            Span::styled("  [Enter] Save", Style::default().fg(STATUS_OK)),
            Span::raw("   "),
            Span::styled("[Esc] Cancel", Style::default().fg(STATUS_ERROR)),
        ]));
    } else {
        let details = &state.committed;
        lines.push(Line::from(format!(
            "  {} {} · {}",
            details.vehicle_type.icon(),
            details.vehicle_type.as_str(),
            details.availability.as_str()
        )));
        lines.push(Line::from(Span::styled(
            format!("  License: {}", state.license_display()),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("  Based in {}", state.user.location),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let ratio = CURRENT_EARNINGS as f64 / DAILY_TARGET as f64;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  DAILY TARGET",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", format_naira(CURRENT_EARNINGS)),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" / {}", format_naira(DAILY_TARGET)),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            format!("   {}%", state.earnings_percent()),
            Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", progress_bar(ratio, 30)),
        Style::default().fg(NIBBO_ORANGE),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
