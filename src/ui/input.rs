use crate::domain::catalog::ACTIVE_COURIER_ORDER_ID;
use crate::domain::Role;
use crate::ui::app::App;
use crate::ui::customer::{CustomerIntent, CustomerView};
use crate::ui::login::LoginIntent;
use crate::ui::navigation::{Dashboard, NavIntent, Screen};
use crate::ui::registration::{RegistrationIntent, RegistrationStep};
use crate::ui::rider::RiderIntent;
use crate::ui::vendor::{ProductField, VendorIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the focused screen is doing, captured before routing so the
/// router can mutate the app freely.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyContext {
    Login,
    Carousel,
    RoleSelection { focused: usize },
    Registration { step: RegistrationStep },
    CustomerFeed,
    CustomerTracking,
    CustomerDetails { cancellable: Option<String> },
    CustomerConfirmCancel,
    Rider { editing: bool },
    Vendor { editing: bool },
    VendorAddProduct { field: ProductField },
}

impl KeyContext {
    fn of(screen: &Screen) -> Self {
        match screen {
            Screen::Login(_) => KeyContext::Login,
            Screen::Carousel { .. } => KeyContext::Carousel,
            Screen::RoleSelection { focused, .. } => {
                KeyContext::RoleSelection { focused: *focused }
            }
            Screen::Registration(state) => KeyContext::Registration { step: state.step },
            Screen::Dashboard(Dashboard::Customer(state)) => {
                if state.is_confirming_cancel() {
                    return KeyContext::CustomerConfirmCancel;
                }
                match &state.view {
                    CustomerView::Feed => KeyContext::CustomerFeed,
                    CustomerView::Tracking { .. } => KeyContext::CustomerTracking,
                    CustomerView::Details(detail) => KeyContext::CustomerDetails {
                        cancellable: detail
                            .can_cancel()
                            .then(|| detail.activity_id().to_string()),
                    },
                }
            }
            Screen::Dashboard(Dashboard::Rider(state)) => KeyContext::Rider {
                editing: state.editing,
            },
            Screen::Dashboard(Dashboard::Vendor(state)) => match &state.add_product {
                Some(draft) => KeyContext::VendorAddProduct {
                    field: draft.focused_field(),
                },
                None => KeyContext::Vendor {
                    editing: state.editing,
                },
            },
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'w') {
        app.copy_support_link();
        return;
    }
    if is_ctrl_char(key, 'l') && app.screen().dashboard().is_some() {
        app.dispatch(NavIntent::Logout);
        return;
    }
    let context = KeyContext::of(app.screen());
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if is_ctrl_char(key, 's') && matches!(context, KeyContext::VendorAddProduct { .. }) {
            app.submit_product();
        }
        return;
    }

    match context {
        KeyContext::Login => login_key(app, key),
        KeyContext::Carousel => match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                app.dispatch(NavIntent::NextSlide)
            }
            KeyCode::Char('s') => app.dispatch(NavIntent::FinishCarousel),
            KeyCode::Esc | KeyCode::Left => app.dispatch(NavIntent::BackToLogin),
            _ => {}
        },
        KeyContext::RoleSelection { focused } => role_selection_key(app, key, focused),
        KeyContext::Registration { step } => registration_key(app, key, step),
        KeyContext::CustomerFeed => customer_feed_key(app, key),
        KeyContext::CustomerTracking => match key.code {
            KeyCode::Esc | KeyCode::Backspace => customer(app, CustomerIntent::CloseView),
            KeyCode::Char('c') => app.copy_rider_call_link(),
            KeyCode::Char('w') => app.copy_rider_chat_link(),
            _ => {}
        },
        KeyContext::CustomerDetails { cancellable } => match key.code {
            KeyCode::Esc | KeyCode::Backspace => customer(app, CustomerIntent::CloseView),
            KeyCode::Char('x') => {
                if let Some(id) = cancellable {
                    customer(app, CustomerIntent::RequestCancel(id));
                }
            }
            _ => {}
        },
        KeyContext::CustomerConfirmCancel => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => customer(app, CustomerIntent::ConfirmCancel),
            KeyCode::Char('n') | KeyCode::Esc => customer(app, CustomerIntent::DismissCancel),
            _ => {}
        },
        KeyContext::Rider { editing } => rider_key(app, key, editing),
        KeyContext::Vendor { editing } => vendor_key(app, key, editing),
        KeyContext::VendorAddProduct { field } => add_product_key(app, key, field),
    }
}

fn login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) => app.dispatch(NavIntent::Login(LoginIntent::Input(ch))),
        KeyCode::Backspace => app.dispatch(NavIntent::Login(LoginIntent::Backspace)),
        KeyCode::Enter => app.dispatch(NavIntent::SubmitLogin),
        _ => {}
    }
}

fn role_selection_key(app: &mut App, key: KeyEvent, focused: usize) {
    match key.code {
        KeyCode::Up | KeyCode::Left => app.dispatch(NavIntent::MoveRole { forward: false }),
        KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
            app.dispatch(NavIntent::MoveRole { forward: true })
        }
        KeyCode::Enter => {
            if let Some(role) = Role::ALL.get(focused) {
                app.dispatch(NavIntent::SelectRole(*role));
            }
        }
        KeyCode::Char(ch @ '1'..='3') => {
            let idx = ch as usize - '1' as usize;
            if let Some(role) = Role::ALL.get(idx) {
                app.dispatch(NavIntent::SelectRole(*role));
            }
        }
        KeyCode::Esc => app.dispatch(NavIntent::BackToCarousel),
        _ => {}
    }
}

fn registration_key(app: &mut App, key: KeyEvent, step: RegistrationStep) {
    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => RegistrationIntent::NextField,
        KeyCode::BackTab | KeyCode::Up => RegistrationIntent::PrevField,
        KeyCode::Left => RegistrationIntent::CycleOption { forward: false },
        KeyCode::Right => RegistrationIntent::CycleOption { forward: true },
        KeyCode::Char(ch) => RegistrationIntent::Input(ch),
        KeyCode::Backspace => RegistrationIntent::Backspace,
        KeyCode::Enter => match step {
            RegistrationStep::Details => RegistrationIntent::Continue,
            RegistrationStep::RoleDetails => {
                app.finish_registration();
                return;
            }
        },
        KeyCode::Esc => {
            app.dispatch(NavIntent::BackToRoleSelection);
            return;
        }
        _ => return,
    };
    app.dispatch(NavIntent::Registration(intent));
}

fn customer(app: &mut App, intent: CustomerIntent) {
    app.dispatch(NavIntent::Customer(intent));
}

fn customer_feed_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Left => CustomerIntent::PrevCategory,
        KeyCode::Right => CustomerIntent::NextCategory,
        KeyCode::Up => CustomerIntent::SelectPrev,
        KeyCode::Down => CustomerIntent::SelectNext,
        KeyCode::Enter => CustomerIntent::OpenSelected,
        KeyCode::Char('f') => CustomerIntent::CycleFilter,
        KeyCode::Char('g') => CustomerIntent::ToggleGrouping,
        KeyCode::Char('x') => CustomerIntent::RequestCancelSelected,
        KeyCode::Char('t') => CustomerIntent::TrackOrder(ACTIVE_COURIER_ORDER_ID.to_string()),
        _ => return,
    };
    customer(app, intent);
}

fn rider_key(app: &mut App, key: KeyEvent, editing: bool) {
    let intent = if editing {
        match key.code {
            KeyCode::Tab | KeyCode::Down => RiderIntent::MoveFocus { forward: true },
            KeyCode::BackTab | KeyCode::Up => RiderIntent::MoveFocus { forward: false },
            KeyCode::Left => RiderIntent::CycleOption { forward: false },
            KeyCode::Right => RiderIntent::CycleOption { forward: true },
            KeyCode::Enter => RiderIntent::Save,
            KeyCode::Esc => RiderIntent::Cancel,
            _ => return,
        }
    } else {
        match key.code {
            KeyCode::Char('o') => RiderIntent::ToggleOnline,
            KeyCode::Char('e') => RiderIntent::StartEdit,
            _ => return,
        }
    };
    app.dispatch(NavIntent::Rider(intent));
}

fn vendor_key(app: &mut App, key: KeyEvent, editing: bool) {
    let intent = if editing {
        match key.code {
            KeyCode::Tab | KeyCode::Down => VendorIntent::NextField,
            KeyCode::BackTab | KeyCode::Up => VendorIntent::PrevField,
            KeyCode::Left => VendorIntent::CycleOption { forward: false },
            KeyCode::Right => VendorIntent::CycleOption { forward: true },
            KeyCode::Char(ch) => VendorIntent::Input(ch),
            KeyCode::Backspace => VendorIntent::Backspace,
            KeyCode::Enter => VendorIntent::Save,
            KeyCode::Esc => VendorIntent::Cancel,
            _ => return,
        }
    } else {
        match key.code {
            KeyCode::Char('o') => VendorIntent::ToggleStore,
            KeyCode::Char('e') => VendorIntent::StartEdit,
            KeyCode::Char('a') => VendorIntent::OpenAddProduct,
            _ => return,
        }
    };
    app.dispatch(NavIntent::Vendor(intent));
}

fn add_product_key(app: &mut App, key: KeyEvent, field: ProductField) {
    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => VendorIntent::NextField,
        KeyCode::BackTab | KeyCode::Up => VendorIntent::PrevField,
        KeyCode::Char(ch) => VendorIntent::Input(ch),
        KeyCode::Backspace => VendorIntent::Backspace,
        KeyCode::Delete => VendorIntent::ClearImage,
        KeyCode::Enter if field == ProductField::Image => {
            app.load_product_image();
            return;
        }
        KeyCode::Enter => {
            app.submit_product();
            return;
        }
        KeyCode::Esc => VendorIntent::CloseAddProduct,
        _ => return,
    };
    app.dispatch(NavIntent::Vendor(intent));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
