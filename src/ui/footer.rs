use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, WHATSAPP_GREEN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SUPPORT_HINT: &str = "Ctrl+W: WhatsApp Support │ Ctrl+Q: Quit";

/// Transient message replacing the key hints.
pub struct FooterStatus<'a> {
    pub text: &'a str,
    pub is_error: bool,
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// `hints` are the screen's own keys; support and quit are always shown.
    pub fn widget(
        &self,
        area: Rect,
        hints: &str,
        status: Option<FooterStatus<'_>>,
    ) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match status {
            Some(status) => {
                let color = if status.is_error { STATUS_ERROR } else { STATUS_OK };
                (format!(" {}", status.text), Style::default().fg(color))
            }
            None if hints.is_empty() => (" ".to_string(), text_style),
            None => (format!(" {hints} │"), text_style),
        };
        let support = format!(" {SUPPORT_HINT}");

        // Char count, not bytes: hints contain box-drawing characters.
        let used = left.chars().count() + support.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(support, Style::default().fg(WHATSAPP_GREEN)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
