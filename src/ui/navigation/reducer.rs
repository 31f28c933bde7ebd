use crate::domain::Role;
use crate::ui::customer::CustomerReducer;
use crate::ui::login::LoginReducer;
use crate::ui::mvi::Reducer;
use crate::ui::registration::{RegistrationReducer, RegistrationState};
use crate::ui::rider::RiderReducer;
use crate::ui::vendor::VendorReducer;

use super::intent::NavIntent;
use super::state::{role_index, Dashboard, Screen, SLIDE_COUNT};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = Screen;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (Screen::Login(login), NavIntent::Login(intent)) => {
                Screen::Login(LoginReducer::reduce(login, intent))
            }
            (Screen::Login(login), NavIntent::SubmitLogin) => {
                if login.can_continue() {
                    Screen::Carousel {
                        phone: login.phone,
                        slide: 0,
                    }
                } else {
                    Screen::Login(login)
                }
            }

            (Screen::Carousel { phone, slide }, NavIntent::NextSlide) => {
                if slide + 1 < SLIDE_COUNT {
                    Screen::Carousel {
                        phone,
                        slide: slide + 1,
                    }
                } else {
                    Screen::RoleSelection { phone, focused: 0 }
                }
            }
            (Screen::Carousel { phone, .. }, NavIntent::FinishCarousel) => {
                Screen::RoleSelection { phone, focused: 0 }
            }
            (Screen::Carousel { .. }, NavIntent::BackToLogin) => Screen::default(),

            (Screen::RoleSelection { phone, focused }, NavIntent::MoveRole { forward }) => {
                let len = Role::ALL.len();
                let focused = if forward {
                    (focused + 1) % len
                } else {
                    (focused + len - 1) % len
                };
                Screen::RoleSelection { phone, focused }
            }
            (Screen::RoleSelection { phone, .. }, NavIntent::SelectRole(role)) => {
                Screen::Registration(RegistrationState::new(role, &phone))
            }
            (Screen::RoleSelection { phone, .. }, NavIntent::BackToCarousel) => {
                Screen::Carousel { phone, slide: 0 }
            }

            (Screen::Registration(registration), NavIntent::Registration(intent)) => {
                Screen::Registration(RegistrationReducer::reduce(registration, intent))
            }
            (Screen::Registration(registration), NavIntent::BackToRoleSelection) => {
                Screen::RoleSelection {
                    focused: role_index(registration.role),
                    phone: registration.provisional_phone,
                }
            }
            (Screen::Registration(registration), NavIntent::FinishRegistration { id }) => {
                if registration.is_last_step() {
                    let role = registration.role;
                    let user = registration.form.into_user(role, id);
                    Screen::Dashboard(Dashboard::for_user(user))
                } else {
                    Screen::Registration(registration)
                }
            }

            (Screen::Dashboard(Dashboard::Customer(state)), NavIntent::Customer(intent)) => {
                Screen::Dashboard(Dashboard::Customer(CustomerReducer::reduce(state, intent)))
            }
            (Screen::Dashboard(Dashboard::Rider(state)), NavIntent::Rider(intent)) => {
                Screen::Dashboard(Dashboard::Rider(RiderReducer::reduce(state, intent)))
            }
            (Screen::Dashboard(Dashboard::Vendor(state)), NavIntent::Vendor(intent)) => {
                Screen::Dashboard(Dashboard::Vendor(VendorReducer::reduce(state, intent)))
            }
            (Screen::Dashboard(_), NavIntent::Logout) => Screen::default(),

            (state, _) => state,
        }
    }
}
