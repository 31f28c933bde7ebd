//! Closed value sets that drive role-based branching.

use std::fmt;

/// The fixed category of a session, chosen once during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Customer,
    Rider,
    Vendor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Rider, Role::Vendor];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Rider => "RIDER",
            Role::Vendor => "VENDOR",
        }
    }

    /// Short pitch shown next to the role on the selection screen.
    pub fn tagline(self) -> &'static str {
        match self {
            Role::Customer => "Send packages and shop Kuto & Sapon markets",
            Role::Rider => "Earn delivering across Abeokuta",
            Role::Vendor => "List your store and reach more customers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VehicleType {
    #[default]
    Bike,
    Car,
    Van,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Car, VehicleType::Van];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Car => "Car",
            VehicleType::Van => "Van",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VehicleType::Bike => "🏍️",
            VehicleType::Car => "🚗",
            VehicleType::Van => "🚐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvailabilityType {
    #[default]
    FullTime,
    PartTime,
    Weekend,
}

impl AvailabilityType {
    pub const ALL: [AvailabilityType; 3] = [
        AvailabilityType::FullTime,
        AvailabilityType::PartTime,
        AvailabilityType::Weekend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityType::FullTime => "Full-time",
            AvailabilityType::PartTime => "Part-time",
            AvailabilityType::Weekend => "Weekend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessCategory {
    #[default]
    FoodAndGroceries,
    TechAndElectronics,
    Pharmacy,
    Fashion,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 4] = [
        BusinessCategory::FoodAndGroceries,
        BusinessCategory::TechAndElectronics,
        BusinessCategory::Pharmacy,
        BusinessCategory::Fashion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessCategory::FoodAndGroceries => "Food & Groceries",
            BusinessCategory::TechAndElectronics => "Tech & Electronics",
            BusinessCategory::Pharmacy => "Pharmacy",
            BusinessCategory::Fashion => "Fashion",
        }
    }
}

/// Step through a closed option list, wrapping at both ends.
pub fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let Some(idx) = options.iter().position(|o| *o == current) else {
        return current;
    };
    let len = options.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options.get(next).copied().unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_forward_and_back() {
        assert_eq!(
            cycle(&VehicleType::ALL, VehicleType::Van, true),
            VehicleType::Bike
        );
        assert_eq!(
            cycle(&VehicleType::ALL, VehicleType::Bike, false),
            VehicleType::Van
        );
        assert_eq!(
            cycle(&BusinessCategory::ALL, BusinessCategory::Pharmacy, true),
            BusinessCategory::Fashion
        );
    }

    #[test]
    fn labels_match_option_lists() {
        assert_eq!(AvailabilityType::PartTime.as_str(), "Part-time");
        assert_eq!(BusinessCategory::TechAndElectronics.as_str(), "Tech & Electronics");
        assert_eq!(Role::Rider.to_string(), "RIDER");
    }
}
