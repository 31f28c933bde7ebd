//! Small drawing helpers shared by the screen views.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Label line plus value line for a form field.
pub fn form_field(label: &str, value: &str, focused: bool, is_choice: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Style::default().fg(NIBBO_ORANGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let value_text = match (is_choice, focused) {
        (true, true) => format!("◀ {value} ▶"),
        (false, true) => format!("{value}▏"),
        _ => value.to_string(),
    };
    let mut value_line = Line::from(vec![
        Span::raw("  "),
        Span::styled(value_text, Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    vec![
        Line::from(Span::styled(format!("  {}", label.to_uppercase()), label_style)),
        value_line,
        Line::from(""),
    ]
}

/// `[██████░░░░]` for a 0..=1 ratio.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bordered box centred over `area`, sized to its content.
pub fn render_modal(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(40);
    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(NIBBO_ORANGE),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(1.7, 4), "[████]");
    }
}
