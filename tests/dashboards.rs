mod common;

use std::fs;

use common::*;
use crossterm::event::KeyCode;
use nibbo::domain::product::DEFAULT_PRODUCT_IMAGE;
use nibbo::domain::{Role, VehicleType};
use nibbo::ui::app::App;
use nibbo::ui::navigation::{Dashboard, Screen};
use nibbo::ui::rider::RiderState;
use nibbo::ui::vendor::VendorState;
use tempfile::TempDir;

fn rider(app: &App) -> &RiderState {
    match app.screen() {
        Screen::Dashboard(Dashboard::Rider(state)) => state,
        other => panic!("expected rider dashboard, got {}", other.name()),
    }
}

fn vendor(app: &App) -> &VendorState {
    match app.screen() {
        Screen::Dashboard(Dashboard::Vendor(state)) => state,
        other => panic!("expected vendor dashboard, got {}", other.name()),
    }
}

#[test]
fn rider_goes_online_and_edits_vehicle() {
    let mut app = registered_app(Role::Rider, "Ada");
    assert!(!rider(&app).is_online);
    press(&mut app, KeyCode::Char('o'));
    assert!(rider(&app).is_online);

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Right);
    assert_eq!(rider(&app).committed.vehicle_type, VehicleType::Bike);
    press(&mut app, KeyCode::Enter);

    let state = rider(&app);
    assert!(!state.editing);
    assert_eq!(state.committed.vehicle_type, VehicleType::Car);
    assert_eq!(state.earnings_percent(), 56);
}

#[test]
fn rider_cancel_discards_draft() {
    let mut app = registered_app(Role::Rider, "Ada");
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Esc);
    let state = rider(&app);
    assert_eq!(state.committed.vehicle_type, VehicleType::Bike);
    assert_eq!(state.draft, state.committed);
}

#[test]
fn vendor_edits_business_name() {
    let mut app = registered_app(Role::Vendor, "Bisi");
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " Ltd");
    press(&mut app, KeyCode::Enter);
    assert_eq!(vendor(&app).committed.business_name, "Kuto Grills Ltd");
}

#[test]
fn vendor_toggles_store() {
    let mut app = registered_app(Role::Vendor, "Bisi");
    assert_eq!(vendor(&app).status_text(), "Live on Níbbo");
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(vendor(&app).status_text(), "Store Closed");
}

#[test]
fn add_product_without_image_uses_default() {
    let mut app = registered_app(Role::Vendor, "Bisi");
    let before = vendor(&app).products.len();

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Suya Platter");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2,500");
    press(&mut app, KeyCode::Enter);

    let state = vendor(&app);
    assert!(state.add_product.is_none());
    assert_eq!(state.products.len(), before + 1);
    let product = state.products.last().unwrap();
    assert_eq!(product.name, "Suya Platter");
    assert_eq!(product.price, 2500);
    assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
    assert_eq!(product.vendor_id, state.user.id);
    assert_eq!(state.order_volume(), 28 + state.products.len());
    assert_eq!(app.status().map(|s| s.text.as_str()), Some("Product added to catalog"));
}

#[test]
fn add_product_needs_name_and_price() {
    let mut app = registered_app(Role::Vendor, "Bisi");
    let before = vendor(&app).products.len();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Suya");
    press(&mut app, KeyCode::Enter);

    let state = vendor(&app);
    assert!(state.add_product.is_some());
    assert_eq!(state.products.len(), before);
}

#[test]
fn add_product_with_local_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("suya.png");
    fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0]).unwrap();

    let mut app = registered_app(Role::Vendor, "Bisi");
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Suya");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "1500");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, path.to_str().unwrap());
    press(&mut app, KeyCode::Enter);

    let draft = vendor(&app).add_product.clone().expect("modal still open");
    assert!(draft.image.as_deref().unwrap().starts_with("data:image/png;base64,"));

    ctrl(&mut app, 's');
    let product = vendor(&app).products.last().cloned().unwrap();
    assert_eq!(product.name, "Suya");
    assert!(product.has_inline_image());
}

#[test]
fn unreadable_image_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut app = registered_app(Role::Vendor, "Bisi");
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, dir.path().join("missing.png").to_str().unwrap());
    press(&mut app, KeyCode::Enter);

    let status = app.status().expect("status message");
    assert!(status.is_error);
    assert!(vendor(&app).add_product.as_ref().unwrap().image.is_none());
}
