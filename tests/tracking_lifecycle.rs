mod common;

use std::sync::mpsc;
use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;
use nibbo::domain::Role;
use nibbo::ui::app::App;
use nibbo::ui::events::AppEvent;
use nibbo::ui::tracking::{TrackingPhase, ARRIVED_PROGRESS};
use tokio::runtime::Handle;

fn tracking_progress(app: &App) -> Option<u8> {
    app.screen()
        .customer()
        .and_then(|customer| customer.tracking())
        .map(|(_, tracking)| tracking.progress)
}

fn drain_ticks(app: &mut App, rx: &mpsc::Receiver<AppEvent>) -> usize {
    let mut delivered = 0;
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::TrackingTick { generation } = event {
            app.on_tracking_tick(generation);
            delivered += 1;
        }
    }
    delivered
}

#[test]
fn entering_tracking_allocates_a_generation() {
    let mut app = registered_app(Role::Customer, "Ngozi");
    assert_eq!(app.tracking_generation(), None);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.tracking_generation(), Some(1));
    assert_eq!(tracking_progress(&app), Some(0));
    // No runtime attached, so nothing is actually ticking.
    assert!(!app.tracking_timer_running());
}

#[test]
fn out_for_delivery_row_opens_tracking() {
    let mut app = registered_app(Role::Customer, "Ngozi");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let (order_id, _) = app
        .screen()
        .customer()
        .and_then(|customer| customer.tracking())
        .expect("tracking view");
    assert_eq!(order_id, "4921");
}

#[test]
fn stale_generation_is_ignored() {
    let mut app = registered_app(Role::Customer, "Ngozi");
    press(&mut app, KeyCode::Char('t'));
    let first = app.tracking_generation().unwrap();
    app.on_tracking_tick(first);
    assert_eq!(tracking_progress(&app), Some(1));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.tracking_generation(), None);

    press(&mut app, KeyCode::Char('t'));
    let second = app.tracking_generation().unwrap();
    assert_ne!(first, second);
    assert_eq!(tracking_progress(&app), Some(0));

    app.on_tracking_tick(first);
    assert_eq!(tracking_progress(&app), Some(0));
    app.on_tracking_tick(second);
    assert_eq!(tracking_progress(&app), Some(1));
}

#[test]
fn arrival_releases_the_timer() {
    let mut app = registered_app(Role::Customer, "Ngozi");
    press(&mut app, KeyCode::Char('t'));
    let generation = app.tracking_generation().unwrap();
    for _ in 0..150 {
        app.on_tracking_tick(generation);
    }

    let (_, tracking) = app
        .screen()
        .customer()
        .and_then(|customer| customer.tracking())
        .expect("still on the tracking view");
    assert_eq!(tracking.progress, ARRIVED_PROGRESS);
    assert_eq!(tracking.phase, TrackingPhase::Arrived);
    assert_eq!(app.tracking_generation(), None);
}

#[test]
fn logout_releases_tracking() {
    let mut app = registered_app(Role::Customer, "Ngozi");
    press(&mut app, KeyCode::Char('t'));
    assert!(app.tracking_generation().is_some());
    ctrl(&mut app, 'l');
    assert_eq!(app.tracking_generation(), None);
}

#[tokio::test(start_paused = true)]
async fn attached_timer_drives_progress_until_view_closes() {
    let (tx, rx) = mpsc::channel();
    let mut app = registered_app(Role::Customer, "Ngozi");
    app.attach_timer(Handle::current(), tx);

    press(&mut app, KeyCode::Char('t'));
    assert!(app.tracking_timer_running());

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(drain_ticks(&mut app, &rx), 3);
    assert_eq!(tracking_progress(&app), Some(3));

    press(&mut app, KeyCode::Esc);
    assert!(!app.tracking_timer_running());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(drain_ticks(&mut app, &rx), 0);
}
