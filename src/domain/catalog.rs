//! Static mock tables seeded into each session.

use crate::domain::order::{Activity, OrderStatus};
use crate::domain::product::Product;

pub const ABEOKUTA_LOCATIONS: [&str; 13] = [
    "Panseke",
    "Asero",
    "Olomore",
    "Obantoko",
    "Kuto",
    "Sapon",
    "Iyana Mortuary",
    "Adigbe",
    "Oke-Mosan",
    "Camp",
    "Lantoro",
    "Lafenwa",
    "Totoro",
];

pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub detail: &'static str,
}

pub const CAROUSEL_SLIDES: [Slide; 3] = [
    Slide {
        title: "Fast Logistics",
        description: "Intra-city deliveries within 45 minutes. Panseke to Asero? We've got you covered.",
        icon: "🚴",
        detail: "Níbbo Express: Intra-city deliveries within 45 minutes across Abeokuta. We handle documents, packages, and fragile goods with care.",
    },
    Slide {
        title: "Market Errands",
        description: "We handle your heavy lifting at Kuto and Sapon markets. Fresh items, direct to your door.",
        icon: "🛒",
        detail: "Market Masters: Our dedicated shoppers navigate the busy stalls of Kuto and Sapon to bring you the freshest produce at market prices.",
    },
    Slide {
        title: "Vendor Growth",
        description: "Empowering Abeokuta's businesses with digital tools and a reliable delivery fleet.",
        icon: "🏪",
        detail: "Local Growth: Empowering Abeokuta's small businesses by providing a digital storefront and reliable fleet support.",
    },
];

/// Top-level shop categories on the customer dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShopCategory {
    #[default]
    All,
    Food,
    Electronics,
    Grocery,
    Pharmacy,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 5] = [
        ShopCategory::All,
        ShopCategory::Food,
        ShopCategory::Electronics,
        ShopCategory::Grocery,
        ShopCategory::Pharmacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShopCategory::All => "All",
            ShopCategory::Food => "Food",
            ShopCategory::Electronics => "Electronics",
            ShopCategory::Grocery => "Grocery",
            ShopCategory::Pharmacy => "Pharmacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VendorListing {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub time: &'static str,
    pub price_range: &'static str,
    pub location: &'static str,
    pub is_fastest: bool,
}

const fn listing(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    rating: f32,
    time: &'static str,
    price_range: &'static str,
    location: &'static str,
    is_fastest: bool,
) -> VendorListing {
    VendorListing {
        id,
        name,
        category,
        rating,
        time,
        price_range,
        location,
        is_fastest,
    }
}

const FOOD_VENDORS: [VendorListing; 3] = [
    listing("f1", "Panseke Jollof Hub", "Local Dishes", 4.8, "20-30 min", "₦₦", "Panseke", true),
    listing("f2", "Kuto Grills & Bar", "Grills", 4.5, "35-45 min", "₦₦₦", "Kuto", false),
    listing("f3", "Rock City Pastries", "Bakery", 4.9, "15-25 min", "₦", "Oke-Mosan", false),
];

const ELECTRONICS_VENDORS: [VendorListing; 2] = [
    listing("e1", "Obantoko Tech Hub", "Gadgets", 4.7, "40-50 min", "₦₦₦", "Obantoko", false),
    listing("e2", "Lafenwa Systems", "Computers", 4.3, "1 hour", "₦₦₦₦", "Lafenwa", false),
];

const GROCERY_VENDORS: [VendorListing; 2] = [
    listing("g1", "Kuto Market Express", "Fresh Produce", 4.6, "45-60 min", "₦", "Kuto", false),
    listing("g2", "Sapon Supermart", "Household", 4.4, "30-40 min", "₦₦", "Sapon", false),
];

const PHARMACY_VENDORS: [VendorListing; 2] = [
    listing("p1", "Lantoro Meds", "Pharmacy", 4.9, "15-20 min", "₦₦", "Lantoro", true),
    listing("p2", "Adigbe Health Plus", "Pharmacy", 4.7, "25-35 min", "₦₦", "Adigbe", false),
];

/// Partner list for a category. `All` has no list; it shows the feed.
pub fn vendors_for(category: ShopCategory) -> &'static [VendorListing] {
    match category {
        ShopCategory::All => &[],
        ShopCategory::Food => &FOOD_VENDORS,
        ShopCategory::Electronics => &ELECTRONICS_VENDORS,
        ShopCategory::Grocery => &GROCERY_VENDORS,
        ShopCategory::Pharmacy => &PHARMACY_VENDORS,
    }
}

fn activity(
    id: &str,
    title: &str,
    time: &str,
    date_group: &str,
    status: OrderStatus,
    icon: &str,
    price: u64,
    progress: u8,
) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        date_group: date_group.to_string(),
        status,
        icon: icon.to_string(),
        color: status.tone(),
        price,
        progress,
    }
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        activity(
            "5102",
            "Food from Kuto",
            "Just now",
            "Today",
            OrderStatus::Processing,
            "🍔",
            4200,
            25,
        ),
        activity(
            "4921",
            "Package from Panseke",
            "10:30 AM",
            "Today",
            OrderStatus::OutForDelivery,
            "🚴",
            2500,
            65,
        ),
        activity(
            "7234",
            "Logistics Order #7234",
            "04:15 PM",
            "Yesterday",
            OrderStatus::Delivered,
            "📦",
            1500,
            100,
        ),
        activity(
            "7235",
            "Sapon Market Shopping",
            "11:00 AM",
            "Yesterday",
            OrderStatus::Completed,
            "🛒",
            8500,
            100,
        ),
        activity(
            "6112",
            "Pharmacy Errands",
            "Oct 22",
            "Older",
            OrderStatus::Cancelled,
            "💊",
            3000,
            0,
        ),
    ]
}

/// Order offered by the floating "active courier" banner.
pub const ACTIVE_COURIER_ORDER_ID: &str = "4921";

pub fn seed_products(vendor_id: &str) -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Jollof Rice (Party Pack)".to_string(),
            price: 1200,
            image: "https://images.unsplash.com/photo-1604329760661-e71dc83f8f26?w=400".to_string(),
            vendor_id: vendor_id.to_string(),
        },
        Product {
            id: "2".to_string(),
            name: "Fried Plantain Side".to_string(),
            price: 500,
            image: "https://images.unsplash.com/photo-1590132812754-07137f74e14f?w=400".to_string(),
            vendor_id: vendor_id.to_string(),
        },
    ]
}

pub struct TopSeller {
    pub name: &'static str,
    pub sold: u32,
    pub revenue: u64,
}

pub const TOP_SELLERS: [TopSeller; 2] = [
    TopSeller {
        name: "Jollof Rice (Party Pack)",
        sold: 42,
        revenue: 12_600,
    },
    TopSeller {
        name: "Fried Plantain Side",
        sold: 31,
        revenue: 4_500,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_progress_respects_status() {
        for activity in seed_activities() {
            match activity.status {
                OrderStatus::Cancelled => assert_eq!(activity.progress, 0),
                OrderStatus::Delivered | OrderStatus::Completed => {
                    assert_eq!(activity.progress, 100)
                }
                _ => assert!(activity.progress < 100),
            }
        }
    }

    #[test]
    fn all_category_has_no_vendor_list() {
        assert!(vendors_for(ShopCategory::All).is_empty());
        assert_eq!(vendors_for(ShopCategory::Food).len(), 3);
    }
}
