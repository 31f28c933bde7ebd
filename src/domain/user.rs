use crate::domain::role::{AvailabilityType, BusinessCategory, Role, VehicleType};

/// Shown on the rider card when no license number was captured.
pub const FALLBACK_LICENSE_NUMBER: &str = "NIB-FL-772";

/// Role-specific extension of a [`User`]. Exactly one variant per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Customer {
        address: Option<String>,
    },
    Rider {
        vehicle_type: VehicleType,
        availability: AvailabilityType,
        license_number: String,
    },
    Vendor {
        business_name: String,
        category: BusinessCategory,
        address: String,
    },
}

impl Default for RoleProfile {
    fn default() -> Self {
        RoleProfile::Customer { address: None }
    }
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Customer { .. } => Role::Customer,
            RoleProfile::Rider { .. } => Role::Rider,
            RoleProfile::Vendor { .. } => Role::Vendor,
        }
    }
}

/// Identity record produced at the end of registration.
///
/// The role is derived from the profile variant, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub id: String,
    pub phone: String,
    pub full_name: String,
    pub location: String,
    pub profile: RoleProfile,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    /// First character of the name, used for avatar badges.
    pub fn initial(&self) -> char {
        self.full_name.chars().next().unwrap_or('U')
    }

    /// Leading `len` characters of the id for the dashboard badge.
    pub fn short_id(&self, len: usize, fallback: &str) -> String {
        let source = if self.id.is_empty() {
            fallback
        } else {
            self.id.as_str()
        };
        source.chars().take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider() -> User {
        User {
            id: "ABC123XYZ".to_string(),
            phone: "08031234567".to_string(),
            full_name: "Ada".to_string(),
            location: "Panseke".to_string(),
            profile: RoleProfile::Rider {
                vehicle_type: VehicleType::Bike,
                availability: AvailabilityType::FullTime,
                license_number: String::new(),
            },
        }
    }

    #[test]
    fn role_follows_profile() {
        assert_eq!(rider().role(), Role::Rider);
    }

    #[test]
    fn short_id_falls_back_when_empty() {
        let mut user = rider();
        assert_eq!(user.short_id(4, "NIBBO"), "ABC1");
        user.id.clear();
        assert_eq!(user.short_id(4, "NIBBO"), "NIBB");
    }

    #[test]
    fn initial_defaults_to_u() {
        let mut user = rider();
        assert_eq!(user.initial(), 'A');
        user.full_name.clear();
        assert_eq!(user.initial(), 'U');
    }
}
