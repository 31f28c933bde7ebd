use crate::domain::catalog::{seed_activities, ShopCategory};
use crate::domain::{Activity, DetailedOrder, User};
use crate::ui::mvi::UiState;
use crate::ui::tracking::TrackingState;

use super::feed::{visible_activities, ActivityFilter, ActivityView};

/// What fills the dashboard body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CustomerView {
    #[default]
    Feed,
    Tracking {
        order_id: String,
        tracking: TrackingState,
    },
    Details(DetailedOrder),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerState {
    pub user: User,
    pub activities: Vec<Activity>,
    pub category: ShopCategory,
    pub activity_view: ActivityView,
    pub activity_filter: ActivityFilter,
    /// Row index into [`CustomerState::visible`].
    pub selected: usize,
    pub view: CustomerView,
    /// Activity id awaiting cancel confirmation.
    pub pending_cancel: Option<String>,
}

impl UiState for CustomerState {}

impl CustomerState {
    pub fn new(user: User) -> Self {
        Self {
            user,
            activities: seed_activities(),
            ..Self::default()
        }
    }

    /// Feed rows in display order after filtering and grouping.
    pub fn visible(&self) -> Vec<&Activity> {
        visible_activities(&self.activities, self.activity_filter, self.activity_view)
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.visible().get(self.selected).copied()
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// Order id and progress while the tracking view is open.
    pub fn tracking(&self) -> Option<(&str, &TrackingState)> {
        match &self.view {
            CustomerView::Tracking { order_id, tracking } => Some((order_id.as_str(), tracking)),
            _ => None,
        }
    }

    pub fn is_confirming_cancel(&self) -> bool {
        self.pending_cancel.is_some()
    }
}
