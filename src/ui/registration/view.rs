use crate::domain::Role;
use crate::ui::registration::{RegistrationState, RegistrationStep};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::form_field;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const HINTS: &str = "Tab: Next field │ ←/→: Change option │ Enter: Continue │ Esc: Back";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &RegistrationState) {
    let step_bar = match state.step {
        RegistrationStep::Details => "━━━━━━━━━━ ──────────",
        RegistrationStep::RoleDetails => "━━━━━━━━━━ ━━━━━━━━━━",
    };
    let heading = match state.step {
        RegistrationStep::Details => "Tell us about you",
        RegistrationStep::RoleDetails => match state.role {
            Role::Customer => "Almost done",
            Role::Rider => "Your ride",
            Role::Vendor => "Your business",
        },
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {step_bar}  Step {} of 2", state.step.number()),
            Style::default().fg(NIBBO_ORANGE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {heading}"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (idx, field) in state.fields().iter().enumerate() {
        lines.extend(form_field(
            field.label(),
            &state.form.value_of(*field),
            idx == state.focus,
            field.is_choice(),
        ));
    }

    if state.is_last_step() && state.role == Role::Customer {
        lines.push(Line::from(Span::styled(
            "  ✓ You're ready to send packages and shop the markets.",
            Style::default().fg(STATUS_OK),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {} · {}", state.form.full_name, state.form.location),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(""));
    }

    if state.is_last_step() {
        let missing = state.form.missing_fields(state.role);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
            lines.push(Line::from(Span::styled(
                format!("  ⚠ Empty: {}", names.join(", ")),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    let button = if state.is_last_step() {
        "  [ Finish Setup ]"
    } else {
        "  [ Continue Registration ]"
    };
    lines.push(Line::from(Span::styled(
        button,
        Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
