use crate::domain::user::FALLBACK_LICENSE_NUMBER;
use crate::domain::{AvailabilityType, RoleProfile, User, VehicleType};
use crate::ui::mvi::UiState;

/// Naira.
pub const DAILY_TARGET: u64 = 15_000;
pub const CURRENT_EARNINGS: u64 = 8_450;

/// Editable part of the rider profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiderDetails {
    pub vehicle_type: VehicleType,
    pub availability: AvailabilityType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiderField {
    VehicleType,
    Availability,
}

impl RiderField {
    pub const ALL: [RiderField; 2] = [RiderField::VehicleType, RiderField::Availability];
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RiderState {
    pub user: User,
    pub license_number: String,
    pub is_online: bool,
    pub editing: bool,
    /// Last saved values; the summary card shows these.
    pub committed: RiderDetails,
    /// Values bound to the edit form.
    pub draft: RiderDetails,
    pub focus: usize,
}

impl UiState for RiderState {}

impl RiderState {
    pub fn new(user: User) -> Self {
        let (details, license_number) = match &user.profile {
            RoleProfile::Rider {
                vehicle_type,
                availability,
                license_number,
            } => (
                RiderDetails {
                    vehicle_type: *vehicle_type,
                    availability: *availability,
                },
                license_number.clone(),
            ),
            _ => (RiderDetails::default(), String::new()),
        };
        Self {
            user,
            license_number,
            is_online: false,
            editing: false,
            committed: details,
            draft: details,
            focus: 0,
        }
    }

    pub fn focused_field(&self) -> RiderField {
        RiderField::ALL
            .get(self.focus)
            .copied()
            .unwrap_or(RiderField::VehicleType)
    }

    pub fn license_display(&self) -> &str {
        if self.license_number.is_empty() {
            FALLBACK_LICENSE_NUMBER
        } else {
            &self.license_number
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_online {
            "Live in Abeokuta"
        } else {
            "Shift Ended"
        }
    }

    /// `R-` plus the first four characters of the user id.
    pub fn badge(&self) -> String {
        format!("R-{}", self.user.short_id(4, "NIBBO"))
    }

    /// Rounded percentage of the daily target already earned.
    pub fn earnings_percent(&self) -> u64 {
        (CURRENT_EARNINGS * 100 + DAILY_TARGET / 2) / DAILY_TARGET
    }
}
