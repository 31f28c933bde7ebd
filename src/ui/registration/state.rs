use crate::domain::catalog::ABEOKUTA_LOCATIONS;
use crate::domain::{AvailabilityType, BusinessCategory, Role, RoleProfile, User, VehicleType};
use crate::ui::login::sanitize_phone;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    /// Phone, name and area; shared by every role.
    #[default]
    Details,
    /// Role-specific fields.
    RoleDetails,
}

impl RegistrationStep {
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::Details => 1,
            RegistrationStep::RoleDetails => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Phone,
    FullName,
    Location,
    VehicleType,
    Availability,
    BusinessName,
    Category,
}

impl RegistrationField {
    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Phone => "Phone Number",
            RegistrationField::FullName => "Full Name",
            RegistrationField::Location => "Default Area (Abeokuta)",
            RegistrationField::VehicleType => "Vehicle Type",
            RegistrationField::Availability => "Availability",
            RegistrationField::BusinessName => "Business Name",
            RegistrationField::Category => "Category",
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(
            self,
            RegistrationField::Location
                | RegistrationField::VehicleType
                | RegistrationField::Availability
                | RegistrationField::Category
        )
    }
}

const DETAIL_FIELDS: &[RegistrationField] = &[
    RegistrationField::Phone,
    RegistrationField::FullName,
    RegistrationField::Location,
];
const RIDER_FIELDS: &[RegistrationField] =
    &[RegistrationField::VehicleType, RegistrationField::Availability];
const VENDOR_FIELDS: &[RegistrationField] =
    &[RegistrationField::BusinessName, RegistrationField::Category];

/// Everything the two steps collect. Role-specific fields keep their
/// defaults when the role doesn't use them.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub phone: String,
    pub full_name: String,
    pub location: String,
    pub vehicle_type: VehicleType,
    pub availability: AvailabilityType,
    pub business_name: String,
    pub category: BusinessCategory,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            phone: String::new(),
            full_name: String::new(),
            location: ABEOKUTA_LOCATIONS[0].to_string(),
            vehicle_type: VehicleType::default(),
            availability: AvailabilityType::default(),
            business_name: String::new(),
            category: BusinessCategory::default(),
        }
    }
}

impl RegistrationForm {
    /// Required text fields left blank for `role`.
    ///
    /// Reported as a warning only; finishing is never blocked.
    pub fn missing_fields(&self, role: Role) -> Vec<RegistrationField> {
        let mut missing = Vec::new();
        if self.phone.is_empty() {
            missing.push(RegistrationField::Phone);
        }
        if self.full_name.trim().is_empty() {
            missing.push(RegistrationField::FullName);
        }
        if role == Role::Vendor && self.business_name.trim().is_empty() {
            missing.push(RegistrationField::BusinessName);
        }
        missing
    }

    /// Build the session user for `role` with a freshly generated `id`.
    pub fn into_user(self, role: Role, id: String) -> User {
        let profile = match role {
            Role::Customer => RoleProfile::Customer { address: None },
            Role::Rider => RoleProfile::Rider {
                vehicle_type: self.vehicle_type,
                availability: self.availability,
                license_number: String::new(),
            },
            Role::Vendor => RoleProfile::Vendor {
                business_name: self.business_name,
                category: self.category,
                address: self.location.clone(),
            },
        };
        User {
            id,
            phone: self.phone,
            full_name: self.full_name,
            location: self.location,
            profile,
        }
    }

    pub fn value_of(&self, field: RegistrationField) -> String {
        match field {
            RegistrationField::Phone => self.phone.clone(),
            RegistrationField::FullName => self.full_name.clone(),
            RegistrationField::Location => self.location.clone(),
            RegistrationField::VehicleType => self.vehicle_type.as_str().to_string(),
            RegistrationField::Availability => self.availability.as_str().to_string(),
            RegistrationField::BusinessName => self.business_name.clone(),
            RegistrationField::Category => self.category.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationState {
    pub role: Role,
    pub step: RegistrationStep,
    pub form: RegistrationForm,
    pub focus: usize,
    /// Phone entered on the login screen, kept for the way back.
    pub provisional_phone: String,
}

impl UiState for RegistrationState {}

impl RegistrationState {
    pub fn new(role: Role, provisional_phone: &str) -> Self {
        let phone = sanitize_phone(provisional_phone);
        Self {
            role,
            step: RegistrationStep::Details,
            form: RegistrationForm {
                phone: phone.clone(),
                ..RegistrationForm::default()
            },
            focus: 0,
            provisional_phone: phone,
        }
    }

    /// Editable fields on the current step.
    pub fn fields(&self) -> &'static [RegistrationField] {
        match (self.step, self.role) {
            (RegistrationStep::Details, _) => DETAIL_FIELDS,
            (RegistrationStep::RoleDetails, Role::Rider) => RIDER_FIELDS,
            (RegistrationStep::RoleDetails, Role::Vendor) => VENDOR_FIELDS,
            (RegistrationStep::RoleDetails, Role::Customer) => &[],
        }
    }

    pub fn focused_field(&self) -> Option<RegistrationField> {
        self.fields().get(self.focus).copied()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == RegistrationStep::RoleDetails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_location() {
        assert_eq!(RegistrationForm::default().location, "Panseke");
    }

    #[test]
    fn vendor_address_defaults_to_location() {
        let form = RegistrationForm {
            business_name: "Panseke Tech Hub".to_string(),
            location: "Kuto".to_string(),
            ..RegistrationForm::default()
        };
        let user = form.into_user(Role::Vendor, "ID".to_string());
        assert_eq!(user.role(), Role::Vendor);
        match user.profile {
            RoleProfile::Vendor { address, .. } => assert_eq!(address, "Kuto"),
            other => panic!("unexpected profile {other:?}"),
        }
    }

    #[test]
    fn missing_fields_depend_on_role() {
        let form = RegistrationForm::default();
        assert_eq!(
            form.missing_fields(Role::Customer),
            vec![RegistrationField::Phone, RegistrationField::FullName]
        );
        assert!(form
            .missing_fields(Role::Vendor)
            .contains(&RegistrationField::BusinessName));
    }

    #[test]
    fn customer_has_no_second_step_fields() {
        let mut state = RegistrationState::new(Role::Customer, "");
        state.step = RegistrationStep::RoleDetails;
        assert!(state.fields().is_empty());
        assert_eq!(state.focused_field(), None);
    }
}
