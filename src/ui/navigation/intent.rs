use crate::domain::Role;
use crate::ui::customer::CustomerIntent;
use crate::ui::login::LoginIntent;
use crate::ui::mvi::Intent;
use crate::ui::registration::RegistrationIntent;
use crate::ui::rider::RiderIntent;
use crate::ui::vendor::VendorIntent;

#[derive(Debug, Clone)]
pub enum NavIntent {
    Login(LoginIntent),
    /// Continue from login; ignored below the minimum phone length.
    SubmitLogin,
    NextSlide,
    /// Skip the remaining slides.
    FinishCarousel,
    BackToLogin,
    MoveRole { forward: bool },
    SelectRole(Role),
    BackToCarousel,
    Registration(RegistrationIntent),
    BackToRoleSelection,
    /// Finish the role step with a freshly generated user id.
    FinishRegistration { id: String },
    Customer(CustomerIntent),
    Rider(RiderIntent),
    Vendor(VendorIntent),
    Logout,
}

impl Intent for NavIntent {}
