use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::domain::ids::{generate_product_id, generate_user_id};
use crate::domain::image_data_url;
use crate::links::{dialer_link, whatsapp_link};
use crate::timer::TrackingTimer;
use crate::ui::customer::CustomerIntent;
use crate::ui::events::AppEvent;
use crate::ui::login::LoginState;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Dashboard, NavIntent, NavReducer, Screen};
use crate::ui::tracking::TrackingIntent;
use crate::ui::vendor::VendorIntent;
use std::path::Path;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

const STATUS_TTL: Duration = Duration::from_secs(4);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Where tracking timers run and post their ticks.
struct TimerContext {
    runtime: Handle,
    events: Sender<AppEvent>,
}

/// The tracking view currently holding a timer.
struct TrackingSession {
    order_id: String,
    generation: u64,
    /// `None` when no runtime is attached (tests drive ticks by hand).
    timer: Option<TrackingTimer>,
}

pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    expires_at: Instant,
}

pub struct App {
    should_quit: bool,
    /// Navigation state (MVI pattern).
    screen: Screen,
    config: Config,
    timer_context: Option<TimerContext>,
    tracking: Option<TrackingSession>,
    tracking_generation: u64,
    /// Opened on first copy.
    clipboard: Option<ClipboardHandler>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            screen: Screen::default(),
            config,
            timer_context: None,
            tracking: None,
            tracking_generation: 0,
            clipboard: None,
            status: None,
        }
    }

    /// Start on the login screen with `phone` already typed.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.screen = Screen::Login(LoginState::with_phone(phone));
        self
    }

    /// Let tracking views run real timers on `runtime`.
    pub fn attach_timer(&mut self, runtime: Handle, events: Sender<AppEvent>) {
        self.timer_context = Some(TimerContext { runtime, events });
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(screen = self.screen.name(), "Quit requested");
        self.should_quit = true;
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Generation of the live tracking timer, if a tracking view is open.
    pub fn tracking_generation(&self) -> Option<u64> {
        self.tracking.as_ref().map(|session| session.generation)
    }

    /// True while a tracking timer task is actually running.
    pub fn tracking_timer_running(&self) -> bool {
        self.tracking
            .as_ref()
            .and_then(|session| session.timer.as_ref())
            .is_some_and(TrackingTimer::is_running)
    }

    pub fn dispatch(&mut self, intent: NavIntent) {
        let from = self.screen.name();
        dispatch_mvi!(self, screen, NavReducer, intent);
        let to = self.screen.name();
        if from != to {
            tracing::info!(from, to, "Screen changed");
        }
        self.sync_tracking();
    }

    pub fn on_tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| Instant::now() >= status.expires_at)
        {
            self.status = None;
        }
    }

    pub fn on_tracking_tick(&mut self, generation: u64) {
        if self.tracking_generation() != Some(generation) {
            tracing::debug!(generation, "Ignoring tick from released tracking timer");
            return;
        }
        self.dispatch(NavIntent::Customer(CustomerIntent::Tracking(
            TrackingIntent::Tick,
        )));
    }

    /// Start, keep or release the tracking timer to match the screen.
    fn sync_tracking(&mut self) {
        let wanted = self
            .screen
            .customer()
            .and_then(|customer| customer.tracking())
            .filter(|(_, tracking)| !tracking.is_finished())
            .map(|(order_id, _)| order_id.to_string());

        let current = self
            .tracking
            .as_ref()
            .map(|session| session.order_id.clone());
        match (current, wanted) {
            (Some(current), Some(wanted)) if current == wanted => {}
            (_, Some(wanted)) => self.start_tracking(wanted),
            (Some(_), None) => self.release_tracking(),
            (None, None) => {}
        }
    }

    fn release_tracking(&mut self) {
        if let Some(session) = self.tracking.take() {
            tracing::info!(
                order_id = %session.order_id,
                generation = session.generation,
                "Tracking released"
            );
        }
    }

    fn start_tracking(&mut self, order_id: String) {
        // Previous timer goes before its replacement starts.
        self.release_tracking();
        self.tracking_generation += 1;
        let generation = self.tracking_generation;
        let timer = self.timer_context.as_ref().map(|context| {
            let events = context.events.clone();
            TrackingTimer::start(
                &context.runtime,
                generation,
                self.config.tracking_interval(),
                move |generation| events.send(AppEvent::TrackingTick { generation }).is_ok(),
            )
        });
        tracing::info!(order_id = %order_id, generation, "Tracking started");
        self.tracking = Some(TrackingSession {
            order_id,
            generation,
            timer,
        });
    }

    /// Finish registration with a fresh user id.
    pub fn finish_registration(&mut self) {
        let Screen::Registration(state) = &self.screen else {
            return;
        };
        if !state.is_last_step() {
            return;
        }
        let missing = state.form.missing_fields(state.role);
        if !missing.is_empty() {
            tracing::warn!(?missing, "Registration finished with empty fields");
        }
        let id = generate_user_id();
        tracing::info!(user_id = %id, role = %state.role, "Registration complete");
        self.dispatch(NavIntent::FinishRegistration { id });
    }

    pub fn submit_product(&mut self) {
        let before = self.product_count();
        self.dispatch(NavIntent::Vendor(VendorIntent::SubmitProduct {
            id: generate_product_id(),
        }));
        if self.product_count() > before {
            self.set_status("Product added to catalog", false);
        }
    }

    fn product_count(&self) -> usize {
        match &self.screen {
            Screen::Dashboard(Dashboard::Vendor(state)) => state.products.len(),
            _ => 0,
        }
    }

    /// Read the image path typed into the add-product modal.
    pub fn load_product_image(&mut self) {
        let Screen::Dashboard(Dashboard::Vendor(state)) = &self.screen else {
            return;
        };
        let Some(path) = state.pending_image_path() else {
            return;
        };
        let image = match image_data_url(Path::new(path)) {
            Ok(data_url) => {
                tracing::info!(path, bytes = data_url.len(), "Product image loaded");
                self.set_status("Image preview loaded", false);
                Some(data_url)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Product image not loaded");
                self.set_status(err.to_string(), true);
                None
            }
        };
        self.dispatch(NavIntent::Vendor(VendorIntent::ImageLoaded(image)));
    }

    pub fn copy_support_link(&mut self) {
        let support = &self.config.support;
        let link = whatsapp_link(&support.whatsapp_number, Some(&support.message));
        self.copy_link("WhatsApp support link", link);
    }

    pub fn copy_rider_call_link(&mut self) {
        let link = dialer_link(&self.config.support.rider_phone);
        self.copy_link("Rider phone link", link);
    }

    pub fn copy_rider_chat_link(&mut self) {
        let link = whatsapp_link(&self.config.support.rider_phone, None);
        self.copy_link("Rider chat link", link);
    }

    fn copy_link(&mut self, what: &str, link: String) {
        if self.clipboard.is_none() {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                }
            }
        }
        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(&link).map_err(|err| err.to_string()),
            None => Err("clipboard unavailable".to_string()),
        };
        match result {
            Ok(()) => {
                tracing::info!(what, "Link copied");
                self.set_status(format!("{what} copied: {link}"), false);
            }
            Err(err) => {
                tracing::warn!(what, error = %err, "Failed to copy link");
                self.set_status(format!("{what}: {link}"), true);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.release_tracking();
    }
}
