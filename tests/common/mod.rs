#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nibbo::config::Config;
use nibbo::domain::Role;
use nibbo::ui::app::App;
use nibbo::ui::input::handle_key;

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, ch: char) {
    handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Drive the keyboard from login to the dashboard for `role`.
pub fn registered_app(role: Role, name: &str) -> App {
    let mut app = App::new(Config::default());
    type_text(&mut app, "08031234567");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    let digit = match role {
        Role::Customer => '1',
        Role::Rider => '2',
        Role::Vendor => '3',
    };
    press(&mut app, KeyCode::Char(digit));
    // Phone is pre-filled; move to the name field.
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, name);
    press(&mut app, KeyCode::Enter);
    if role == Role::Vendor {
        type_text(&mut app, "Kuto Grills");
    }
    press(&mut app, KeyCode::Enter);
    app
}
