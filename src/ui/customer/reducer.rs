use crate::domain::catalog::ShopCategory;
use crate::domain::role::cycle;
use crate::domain::{DetailedOrder, OrderStatus};
use crate::ui::mvi::Reducer;
use crate::ui::tracking::{TrackingReducer, TrackingState};

use super::feed::{open_target, synthesize_detail, ActivityFilter, OpenTarget};
use super::intent::CustomerIntent;
use super::state::{CustomerState, CustomerView};

pub struct CustomerReducer;

impl Reducer for CustomerReducer {
    type State = CustomerState;
    type Intent = CustomerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CustomerIntent::NextCategory => {
                state.category = cycle(&ShopCategory::ALL, state.category, true);
            }
            CustomerIntent::PrevCategory => {
                state.category = cycle(&ShopCategory::ALL, state.category, false);
            }
            CustomerIntent::SelectCategory(category) => state.category = category,
            CustomerIntent::CycleFilter => {
                state.activity_filter = cycle(&ActivityFilter::ALL, state.activity_filter, true);
                state.selected = 0;
            }
            CustomerIntent::SetFilter(filter) => {
                state.activity_filter = filter;
                state.selected = 0;
            }
            CustomerIntent::ToggleGrouping => {
                state.activity_view = state.activity_view.toggled();
                state.selected = 0;
            }
            CustomerIntent::SelectNext => {
                let len = state.visible().len();
                if state.selected + 1 < len {
                    state.selected += 1;
                }
            }
            CustomerIntent::SelectPrev => {
                state.selected = state.selected.saturating_sub(1);
            }
            CustomerIntent::OpenSelected => {
                if state.category != ShopCategory::All {
                    return state;
                }
                let Some(activity) = state.selected_activity() else {
                    return state;
                };
                let view = match open_target(activity.status) {
                    OpenTarget::Tracking => CustomerView::Tracking {
                        order_id: activity.id.clone(),
                        tracking: TrackingState::default(),
                    },
                    OpenTarget::Details => {
                        CustomerView::Details(synthesize_detail(activity, &state.user.location))
                    }
                };
                state.view = view;
            }
            CustomerIntent::TrackOrder(order_id) => {
                state.view = CustomerView::Tracking {
                    order_id,
                    tracking: TrackingState::default(),
                };
            }
            CustomerIntent::ViewDetails(id) => {
                if let Some(activity) = state.activity(&id) {
                    state.view =
                        CustomerView::Details(synthesize_detail(activity, &state.user.location));
                }
            }
            CustomerIntent::CloseView => {
                state.view = CustomerView::Feed;
                state.pending_cancel = None;
            }
            CustomerIntent::Tracking(tracking_intent) => {
                if let CustomerView::Tracking { tracking, .. } = &mut state.view {
                    *tracking = TrackingReducer::reduce(*tracking, tracking_intent);
                }
            }
            CustomerIntent::RequestCancel(id) => state.pending_cancel = Some(id),
            CustomerIntent::RequestCancelSelected => {
                let pending = state
                    .selected_activity()
                    .filter(|activity| activity.status.is_in_progress())
                    .map(|activity| activity.id.clone());
                if pending.is_some() {
                    state.pending_cancel = pending;
                }
            }
            CustomerIntent::ConfirmCancel => {
                if let Some(id) = state.pending_cancel.take() {
                    confirm_cancel(&mut state, &id);
                    // The cancelled row may have left the filtered list.
                    state.selected = state.selected.min(state.visible().len().saturating_sub(1));
                }
            }
            CustomerIntent::DismissCancel => state.pending_cancel = None,
        }
        state
    }
}

/// Cancel activity `id` and mirror it onto the open detail view.
/// Unknown ids change nothing.
fn confirm_cancel(state: &mut CustomerState, id: &str) {
    let Some(activity) = state.activities.iter_mut().find(|a| a.id == id) else {
        return;
    };
    activity.cancel();
    if let CustomerView::Details(detail) = &mut state.view {
        if detail.id == DetailedOrder::detail_id(id) {
            detail.status = OrderStatus::Cancelled;
        }
    }
}
