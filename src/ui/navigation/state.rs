use crate::domain::catalog::CAROUSEL_SLIDES;
use crate::domain::{Role, RoleProfile, User};
use crate::ui::customer::CustomerState;
use crate::ui::login::LoginState;
use crate::ui::mvi::UiState;
use crate::ui::registration::RegistrationState;
use crate::ui::rider::RiderState;
use crate::ui::vendor::VendorState;

/// Role-specific main screen. Each variant owns its user, so a dashboard
/// can't exist without one.
#[derive(Debug, Clone, PartialEq)]
pub enum Dashboard {
    Customer(CustomerState),
    Rider(RiderState),
    Vendor(VendorState),
}

impl Dashboard {
    pub fn for_user(user: User) -> Self {
        match user.profile {
            RoleProfile::Customer { .. } => Dashboard::Customer(CustomerState::new(user)),
            RoleProfile::Rider { .. } => Dashboard::Rider(RiderState::new(user)),
            RoleProfile::Vendor { .. } => Dashboard::Vendor(VendorState::new(user)),
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Dashboard::Customer(state) => &state.user,
            Dashboard::Rider(state) => &state.user,
            Dashboard::Vendor(state) => &state.user,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Customer(_) => Role::Customer,
            Dashboard::Rider(_) => Role::Rider,
            Dashboard::Vendor(_) => Role::Vendor,
        }
    }
}

/// The single current-screen value. Data needed by later screens travels
/// inside the variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login(LoginState),
    Carousel { phone: String, slide: usize },
    RoleSelection { phone: String, focused: usize },
    Registration(RegistrationState),
    Dashboard(Dashboard),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginState::default())
    }
}

impl UiState for Screen {}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "login",
            Screen::Carousel { .. } => "carousel",
            Screen::RoleSelection { .. } => "onboarding",
            Screen::Registration(_) => "registration",
            Screen::Dashboard(_) => "dashboard",
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Screen::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    /// Signed-in user, once registration has finished.
    pub fn user(&self) -> Option<&User> {
        self.dashboard().map(Dashboard::user)
    }

    /// Phone captured on the login screen, until logout.
    pub fn provisional_phone(&self) -> Option<&str> {
        match self {
            Screen::Login(_) | Screen::Dashboard(_) => None,
            Screen::Carousel { phone, .. } | Screen::RoleSelection { phone, .. } => {
                Some(phone.as_str())
            }
            Screen::Registration(state) => Some(state.provisional_phone.as_str()),
        }
    }

    pub fn customer(&self) -> Option<&CustomerState> {
        match self {
            Screen::Dashboard(Dashboard::Customer(state)) => Some(state),
            _ => None,
        }
    }
}

pub(super) const SLIDE_COUNT: usize = CAROUSEL_SLIDES.len();

pub(super) fn role_index(role: Role) -> usize {
    Role::ALL.iter().position(|r| *r == role).unwrap_or(0)
}
