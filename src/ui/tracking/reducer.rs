use crate::ui::mvi::Reducer;

use super::intent::TrackingIntent;
use super::state::{TrackingPhase, TrackingState};

pub struct TrackingReducer;

impl Reducer for TrackingReducer {
    type State = TrackingState;
    type Intent = TrackingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrackingIntent::Tick => {
                if state.is_finished() {
                    return state;
                }
                let progress = state.progress + 1;
                TrackingState {
                    progress,
                    phase: TrackingPhase::for_progress(progress),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(n: usize) -> TrackingState {
        (0..n).fold(TrackingState::default(), |state, _| {
            TrackingReducer::reduce(state, TrackingIntent::Tick)
        })
    }

    #[test]
    fn starts_en_route() {
        let state = TrackingState::default();
        assert_eq!(state.progress, 0);
        assert_eq!(state.status_text(), "Rider En-route");
    }

    #[test]
    fn forty_one_ticks_moves_through_panseke() {
        let state = ticks(41);
        assert_eq!(state.progress, 41);
        assert_eq!(state.status_text(), "Moving through Panseke");
    }

    #[test]
    fn eighty_one_ticks_almost_there() {
        assert_eq!(ticks(81).status_text(), "Almost there!");
    }

    #[test]
    fn hundred_ticks_arrives_and_stays() {
        let state = ticks(100);
        assert_eq!(state.progress, 100);
        assert_eq!(state.status_text(), "Arrived at Location");
        assert!(state.is_finished());

        let after = (0..25).fold(state, |s, _| TrackingReducer::reduce(s, TrackingIntent::Tick));
        assert_eq!(after, state);
    }
}
