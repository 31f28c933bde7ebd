mod common;

use common::*;
use crossterm::event::KeyCode;
use nibbo::config::Config;
use nibbo::domain::{Role, RoleProfile, VehicleType};
use nibbo::ui::app::App;
use nibbo::ui::navigation::{Dashboard, NavIntent, Screen};
use nibbo::ui::registration::RegistrationIntent;

#[test]
fn rider_registration_end_to_end() {
    let mut app = App::new(Config::default());

    type_text(&mut app, "08031234567");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen().name(), "carousel");
    assert_eq!(app.screen().provisional_phone(), Some("08031234567"));

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen().name(), "onboarding");

    app.dispatch(NavIntent::SelectRole(Role::Rider));
    assert_eq!(app.screen().name(), "registration");

    app.dispatch(NavIntent::Registration(RegistrationIntent::NextField));
    for ch in "Ada".chars() {
        app.dispatch(NavIntent::Registration(RegistrationIntent::Input(ch)));
    }
    app.dispatch(NavIntent::Registration(RegistrationIntent::Continue));
    for _ in 0..2 {
        app.dispatch(NavIntent::Registration(RegistrationIntent::CycleOption {
            forward: true,
        }));
    }
    app.finish_registration();

    let Screen::Dashboard(Dashboard::Rider(rider)) = app.screen() else {
        panic!("expected rider dashboard, got {}", app.screen().name());
    };
    assert_eq!(rider.committed.vehicle_type, VehicleType::Van);
    assert_eq!(rider.user.full_name, "Ada");
    assert_eq!(rider.user.location, "Panseke");
    assert_eq!(rider.user.phone, "08031234567");
    assert_eq!(rider.user.id.len(), 9);
    assert!(matches!(rider.user.profile, RoleProfile::Rider { .. }));
}

#[test]
fn continue_needs_ten_digits() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "080-312-345");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen().name(), "login");

    type_text(&mut app, "6");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen().name(), "carousel");
}

#[test]
fn back_edges_unwind_onboarding() {
    let mut app = App::new(Config::default()).with_phone("08031234567");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.screen().name(), "registration");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen().name(), "onboarding");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen().name(), "carousel");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), &Screen::default());
}

#[test]
fn logout_from_each_dashboard_resets_session() {
    for role in Role::ALL {
        let mut app = registered_app(role, "Tunde");
        let dashboard = app.screen().dashboard().expect("dashboard");
        assert_eq!(dashboard.role(), role);
        assert_eq!(dashboard.user().role(), role);

        ctrl(&mut app, 'l');
        assert_eq!(app.screen(), &Screen::default());
        assert!(app.screen().user().is_none());
    }
}

#[test]
fn ctrl_l_outside_dashboard_is_ignored() {
    let mut app = App::new(Config::default()).with_phone("08031234567");
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'l');
    assert_eq!(app.screen().name(), "carousel");
}

#[test]
fn ctrl_q_requests_quit_from_any_screen() {
    let mut app = App::new(Config::default());
    assert!(!app.should_quit());
    ctrl(&mut app, 'q');
    assert!(app.should_quit());
}

#[test]
fn customer_registration_allows_empty_name() {
    let mut app = App::new(Config::default()).with_phone("08031234567");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let user = app.screen().user().expect("signed in");
    assert_eq!(user.role(), Role::Customer);
    assert!(user.full_name.is_empty());
}

#[test]
fn vendor_profile_carries_business_details() {
    let app = registered_app(Role::Vendor, "Bisi");
    let Screen::Dashboard(Dashboard::Vendor(vendor)) = app.screen() else {
        panic!("expected vendor dashboard");
    };
    assert_eq!(vendor.committed.business_name, "Kuto Grills");
    assert_eq!(vendor.committed.address, "Panseke");
}
