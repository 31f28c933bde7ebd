//! Order summaries and their line-itemised detail view.

use std::fmt;

/// Terminal-state enumeration for orders. No transition table is enforced;
/// the cancel flow may force any status to `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processing,
    OutForDelivery,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Processing or out for delivery.
    pub fn is_in_progress(self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::OutForDelivery)
    }

    pub fn tone(self) -> Tone {
        match self {
            OrderStatus::Processing => Tone::Blue,
            OrderStatus::OutForDelivery => Tone::Orange,
            OrderStatus::Delivered | OrderStatus::Completed => Tone::Emerald,
            OrderStatus::Cancelled => Tone::Rose,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour tag attached to an activity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Blue,
    Orange,
    Emerald,
    Rose,
}

/// Summary record of an order shown in the customer feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub time: String,
    pub date_group: String,
    pub status: OrderStatus,
    pub icon: String,
    pub color: Tone,
    /// Naira.
    pub price: u64,
    /// Percent, only meaningful while the order is in progress.
    pub progress: u8,
}

impl Activity {
    /// Force the order into the cancelled state.
    pub fn cancel(&mut self) {
        self.status = OrderStatus::Cancelled;
        self.color = Tone::Rose;
        self.progress = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorInfo {
    pub name: String,
    pub category: String,
    pub location: String,
}

/// Prefix joining a detailed order id to its activity id.
pub const DETAIL_ID_PREFIX: &str = "NB-";

/// Expanded view of an [`Activity`], synthesised on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedOrder {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub total: u64,
    pub delivery_address: String,
    pub vendor: VendorInfo,
}

/// One step of the order lifecycle stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const LIFECYCLE_STEPS: [LifecycleStep; 3] = [
    LifecycleStep {
        status: OrderStatus::Processing,
        label: "Order Confirmed",
        icon: "📝",
    },
    LifecycleStep {
        status: OrderStatus::OutForDelivery,
        label: "Out for Delivery",
        icon: "🚴",
    },
    LifecycleStep {
        status: OrderStatus::Delivered,
        label: "Delivered",
        icon: "✅",
    },
];

impl DetailedOrder {
    pub fn detail_id(activity_id: &str) -> String {
        format!("{DETAIL_ID_PREFIX}{activity_id}")
    }

    /// Id of the activity this view was synthesised from.
    pub fn activity_id(&self) -> &str {
        self.id.strip_prefix(DETAIL_ID_PREFIX).unwrap_or(&self.id)
    }

    pub fn can_cancel(&self) -> bool {
        self.status.is_in_progress()
    }

    /// Index into [`LIFECYCLE_STEPS`]; `None` for cancelled orders.
    pub fn lifecycle_index(&self) -> Option<usize> {
        match self.status {
            OrderStatus::Cancelled => None,
            OrderStatus::Completed => Some(2),
            status => LIFECYCLE_STEPS.iter().position(|s| s.status == status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(status: OrderStatus) -> DetailedOrder {
        DetailedOrder {
            id: DetailedOrder::detail_id("5102"),
            title: "Food from Kuto".to_string(),
            date: "Today".to_string(),
            time: "Just now".to_string(),
            status,
            items: Vec::new(),
            subtotal: 0,
            delivery_fee: 0,
            total: 0,
            delivery_address: String::new(),
            vendor: VendorInfo {
                name: String::new(),
                category: String::new(),
                location: String::new(),
            },
        }
    }

    #[test]
    fn activity_id_strips_prefix() {
        assert_eq!(detail(OrderStatus::Processing).activity_id(), "5102");
    }

    #[test]
    fn lifecycle_index_per_status() {
        assert_eq!(detail(OrderStatus::Processing).lifecycle_index(), Some(0));
        assert_eq!(detail(OrderStatus::OutForDelivery).lifecycle_index(), Some(1));
        assert_eq!(detail(OrderStatus::Delivered).lifecycle_index(), Some(2));
        assert_eq!(detail(OrderStatus::Completed).lifecycle_index(), Some(2));
        assert_eq!(detail(OrderStatus::Cancelled).lifecycle_index(), None);
    }

    #[test]
    fn cancel_pins_progress_and_tone() {
        let mut activity = Activity {
            id: "1".to_string(),
            title: "t".to_string(),
            time: "now".to_string(),
            date_group: "Today".to_string(),
            status: OrderStatus::OutForDelivery,
            icon: "🚴".to_string(),
            color: Tone::Orange,
            price: 100,
            progress: 65,
        };
        activity.cancel();
        assert_eq!(activity.status, OrderStatus::Cancelled);
        assert_eq!(activity.color, Tone::Rose);
        assert_eq!(activity.progress, 0);
    }
}
