use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, STATUS_OK, WHATSAPP_GREEN};
use crate::ui::tracking::TrackingState;
use crate::ui::widgets::progress_bar;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const HINTS: &str = "c: Copy call link │ w: Copy chat link │ Esc: Back";

pub fn render(frame: &mut Frame<'_>, area: Rect, order_id: &str, state: &TrackingState) {
    let status_color = if state.is_finished() {
        STATUS_OK
    } else {
        NIBBO_ORANGE
    };
    let bar_width = (area.width as usize).saturating_sub(16).clamp(10, 50);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Order #{order_id}"),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {}", state.status_text()),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", progress_bar(state.ratio(), bar_width)),
                Style::default().fg(status_color),
            ),
            Span::styled(format!(" {:>3}%", state.progress), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  🏍️  Your rider · Níbbo Express",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(vec![
            Span::styled("  📞 c: Call rider   ", Style::default().fg(HEADER_TEXT)),
            Span::styled("💬 w: Chat on WhatsApp", Style::default().fg(WHATSAPP_GREEN)),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(" Live Tracking ", Style::default().fg(NIBBO_ORANGE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_TEXT));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
