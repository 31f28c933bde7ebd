use crate::ui::navigation::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, NIBBO_ORANGE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: &Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default()
            .fg(NIBBO_ORANGE)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Níbbo", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(title(screen), text_style),
        ];
        if let Some(user) = screen.user() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} · {}", user.full_name, user.role()),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn title(screen: &Screen) -> String {
    match screen {
        Screen::Login(_) => "Welcome".to_string(),
        Screen::Carousel { slide, .. } => format!("Discover ({}/3)", slide + 1),
        Screen::RoleSelection { .. } => "Choose your role".to_string(),
        Screen::Registration(state) => {
            format!("{} registration · step {}/2", state.role, state.step.number())
        }
        Screen::Dashboard(dashboard) => match dashboard.user().location.as_str() {
            "" => "Dashboard".to_string(),
            location => format!("Dashboard · {location}"),
        },
    }
}
