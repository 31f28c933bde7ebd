use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterStatus};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::{Dashboard, Screen};
use crate::ui::{customer, login, onboarding, registration, rider, vendor};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.screen();

    frame.render_widget(Header::new().widget(screen), header);
    frame.render_widget(Clear, body);

    let hints = match screen {
        Screen::Login(state) => {
            login::view::render(frame, body, state);
            login::view::HINTS
        }
        Screen::Carousel { slide, .. } => {
            onboarding::render_carousel(frame, body, *slide);
            onboarding::CAROUSEL_HINTS
        }
        Screen::RoleSelection { focused, .. } => {
            onboarding::render_role_selection(frame, body, *focused);
            onboarding::ROLE_HINTS
        }
        Screen::Registration(state) => {
            registration::view::render(frame, body, state);
            registration::view::HINTS
        }
        Screen::Dashboard(Dashboard::Customer(state)) => {
            customer::view::render(frame, body, state);
            customer::view::hints(state)
        }
        Screen::Dashboard(Dashboard::Rider(state)) => {
            rider::view::render(frame, body, state);
            rider::view::hints(state)
        }
        Screen::Dashboard(Dashboard::Vendor(state)) => {
            vendor::view::render(frame, body, state);
            vendor::view::hints(state)
        }
    };

    let status = app.status().map(|status| FooterStatus {
        text: &status.text,
        is_error: status.is_error,
    });
    frame.render_widget(Footer::new().widget(footer, hints, status), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn login_screen_shows_support_hint() {
        let app = App::new(Config::default()).with_phone("0803");
        let text = rendered_text(&app);
        assert!(text.contains("WhatsApp Support"));
        assert!(text.contains("0803"));
    }
}
