use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingIntent {
    /// One simulated second elapsed.
    Tick,
}

impl Intent for TrackingIntent {}
