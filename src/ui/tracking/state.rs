use crate::ui::mvi::UiState;

pub const ARRIVED_PROGRESS: u8 = 100;

/// Status line shown on the tracking card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    #[default]
    EnRoute,
    MovingThroughPanseke,
    AlmostThere,
    Arrived,
}

impl TrackingPhase {
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            p if p >= ARRIVED_PROGRESS => TrackingPhase::Arrived,
            p if p > 80 => TrackingPhase::AlmostThere,
            p if p > 40 => TrackingPhase::MovingThroughPanseke,
            _ => TrackingPhase::EnRoute,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            TrackingPhase::EnRoute => "Rider En-route",
            TrackingPhase::MovingThroughPanseke => "Moving through Panseke",
            TrackingPhase::AlmostThere => "Almost there!",
            TrackingPhase::Arrived => "Arrived at Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackingState {
    pub progress: u8,
    pub phase: TrackingPhase,
}

impl UiState for TrackingState {}

impl TrackingState {
    pub fn status_text(&self) -> &'static str {
        self.phase.text()
    }

    /// Once arrived, no tick changes anything and the timer can be released.
    pub fn is_finished(&self) -> bool {
        self.progress >= ARRIVED_PROGRESS
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.progress.min(ARRIVED_PROGRESS)) / f64::from(ARRIVED_PROGRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_thresholds() {
        assert_eq!(TrackingPhase::for_progress(0), TrackingPhase::EnRoute);
        assert_eq!(TrackingPhase::for_progress(40), TrackingPhase::EnRoute);
        assert_eq!(TrackingPhase::for_progress(41), TrackingPhase::MovingThroughPanseke);
        assert_eq!(TrackingPhase::for_progress(80), TrackingPhase::MovingThroughPanseke);
        assert_eq!(TrackingPhase::for_progress(81), TrackingPhase::AlmostThere);
        assert_eq!(TrackingPhase::for_progress(100), TrackingPhase::Arrived);
    }
}
