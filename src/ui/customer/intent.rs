use crate::domain::catalog::ShopCategory;
use crate::ui::mvi::Intent;
use crate::ui::tracking::TrackingIntent;

use super::feed::ActivityFilter;

#[derive(Debug, Clone)]
pub enum CustomerIntent {
    NextCategory,
    PrevCategory,
    SelectCategory(ShopCategory),
    CycleFilter,
    SetFilter(ActivityFilter),
    /// Switch between date and status grouping.
    ToggleGrouping,
    SelectNext,
    SelectPrev,
    /// Open the highlighted feed row as tracking or details.
    OpenSelected,
    TrackOrder(String),
    ViewDetails(String),
    /// Back from tracking or details to the feed.
    CloseView,
    Tracking(TrackingIntent),
    /// Open the cancel confirmation for an activity id.
    RequestCancel(String),
    /// Same, for the highlighted row if it is still in progress.
    RequestCancelSelected,
    ConfirmCancel,
    DismissCancel,
}

impl Intent for CustomerIntent {}
