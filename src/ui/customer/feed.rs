//! Pure transforms over the customer's activity list.
//!
//! Nothing here mutates the source list; every view is recomputed on read.

use crate::domain::order::DetailedOrder;
use crate::domain::{Activity, OrderItem, OrderStatus, VendorInfo};

/// Fee line split out of the order price on the detail view.
pub const HANDLING_FEE: u64 = 500;
pub const DELIVERY_FEE: u64 = 1500;

const OLDER_GROUP: &str = "Older";
const OLDER_DATE: &str = "Oct 22, 2024";
const FALLBACK_ITEM_NAME: &str = "Logistics Package";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Active,
    Completed,
    Cancelled,
}

impl ActivityFilter {
    pub const ALL: [ActivityFilter; 4] = [
        ActivityFilter::All,
        ActivityFilter::Active,
        ActivityFilter::Completed,
        ActivityFilter::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityFilter::All => "All",
            ActivityFilter::Active => "Active",
            ActivityFilter::Completed => "Completed",
            ActivityFilter::Cancelled => "Cancelled",
        }
    }

    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Active => status.is_in_progress(),
            ActivityFilter::Completed => {
                matches!(status, OrderStatus::Delivered | OrderStatus::Completed)
            }
            ActivityFilter::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

/// Grouping key for the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityView {
    #[default]
    Date,
    Status,
}

impl ActivityView {
    pub fn toggled(self) -> Self {
        match self {
            ActivityView::Date => ActivityView::Status,
            ActivityView::Status => ActivityView::Date,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityView::Date => "By Date",
            ActivityView::Status => "By Status",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityGroup<'a> {
    pub label: String,
    pub items: Vec<&'a Activity>,
}

pub fn filter_activities(activities: &[Activity], filter: ActivityFilter) -> Vec<&Activity> {
    activities
        .iter()
        .filter(|activity| filter.matches(activity.status))
        .collect()
}

/// Partition `activities` by date group or status label.
///
/// Groups appear in first-seen order and are never empty.
pub fn group_activities<'a>(
    activities: &[&'a Activity],
    view: ActivityView,
) -> Vec<ActivityGroup<'a>> {
    let mut groups: Vec<ActivityGroup<'a>> = Vec::new();
    for &activity in activities {
        let label = match view {
            ActivityView::Date => activity.date_group.as_str(),
            ActivityView::Status => activity.status.as_str(),
        };
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.items.push(activity),
            None => groups.push(ActivityGroup {
                label: label.to_string(),
                items: vec![activity],
            }),
        }
    }
    groups
}

/// Filtered list flattened in the grouped display order.
///
/// Row selection indexes into this list.
pub fn visible_activities(
    activities: &[Activity],
    filter: ActivityFilter,
    view: ActivityView,
) -> Vec<&Activity> {
    let filtered = filter_activities(activities, filter);
    group_activities(&filtered, view)
        .into_iter()
        .flat_map(|group| group.items)
        .collect()
}

/// Where opening an activity lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    Tracking,
    Details,
}

pub fn open_target(status: OrderStatus) -> OpenTarget {
    if status == OrderStatus::OutForDelivery {
        OpenTarget::Tracking
    } else {
        OpenTarget::Details
    }
}

/// Build the line-itemised detail view for an activity.
///
/// The vendor and item split is a display heuristic over the title; there
/// is no real order record behind it.
pub fn synthesize_detail(activity: &Activity, user_location: &str) -> DetailedOrder {
    let item_name = activity
        .title
        .split("from")
        .nth(1)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_ITEM_NAME);

    let date = if activity.date_group == OLDER_GROUP {
        OLDER_DATE.to_string()
    } else {
        activity.date_group.clone()
    };

    let vendor = if activity.title.contains("Market") {
        VendorInfo {
            name: "Kuto Central Market".to_string(),
            category: "Market Errands".to_string(),
            location: "Abeokuta South".to_string(),
        }
    } else {
        VendorInfo {
            name: "Níbbo Logistics Hub".to_string(),
            category: "Express Delivery".to_string(),
            location: "Abeokuta South".to_string(),
        }
    };

    DetailedOrder {
        id: DetailedOrder::detail_id(&activity.id),
        title: activity.title.clone(),
        date,
        time: activity.time.clone(),
        status: activity.status,
        items: vec![
            OrderItem {
                id: "1".to_string(),
                name: item_name.to_string(),
                quantity: 1,
                price: activity.price.saturating_sub(HANDLING_FEE),
            },
            OrderItem {
                id: "2".to_string(),
                name: "Handling Fee".to_string(),
                quantity: 1,
                price: HANDLING_FEE,
            },
        ],
        subtotal: activity.price,
        delivery_fee: DELIVERY_FEE,
        total: activity.price + DELIVERY_FEE,
        delivery_address: format!("{user_location}, Abeokuta City Center"),
        vendor,
    }
}
