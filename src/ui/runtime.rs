use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: Config, phone: Option<String>) -> io::Result<()> {
    // Tracking timers only; one worker is plenty.
    let timers = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("nibbo-timer")
        .enable_time()
        .build()?;

    let tick_rate = config.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate)?;

    let mut app = App::new(config);
    if let Some(phone) = phone.as_deref() {
        app = app.with_phone(phone);
    }
    app.attach_timer(timers.handle().clone(), events.sender());
    tracing::info!(screen = app.screen().name(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Timers go before the runtime that drives them.
    drop(app);
    drop(events);
    drop(guard);
    timers.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("UI stopped");
    Ok(())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "Terminal resized");
        }
        AppEvent::TrackingTick { generation } => app.on_tracking_tick(generation),
        AppEvent::InputFailed(error) => {
            tracing::error!(error = %error, "Terminal input lost, shutting down");
            app.request_quit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navigation::Screen;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn input_failure_quits() {
        let mut app = App::new(Config::default());
        handle_event(&mut app, AppEvent::InputFailed("poll failed".to_string()));
        assert!(app.should_quit());
    }

    #[test]
    fn keys_are_routed_to_the_screen() {
        let mut app = App::new(Config::default());
        handle_event(
            &mut app,
            AppEvent::Key(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE)),
        );
        handle_event(&mut app, AppEvent::Tick);
        assert!(!app.should_quit());
        match app.screen() {
            Screen::Login(login) => assert_eq!(login.phone, "0"),
            other => panic!("expected login, got {}", other.name()),
        }
    }
}
