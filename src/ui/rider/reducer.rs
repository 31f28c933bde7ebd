use crate::domain::role::cycle;
use crate::domain::{AvailabilityType, VehicleType};
use crate::ui::mvi::Reducer;

use super::intent::RiderIntent;
use super::state::{RiderField, RiderState};

pub struct RiderReducer;

impl Reducer for RiderReducer {
    type State = RiderState;
    type Intent = RiderIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RiderIntent::ToggleOnline => state.is_online = !state.is_online,
            RiderIntent::StartEdit => {
                state.editing = true;
                state.draft = state.committed;
                state.focus = 0;
            }
            RiderIntent::MoveFocus { forward } if state.editing => {
                let len = RiderField::ALL.len();
                state.focus = if forward {
                    (state.focus + 1) % len
                } else {
                    (state.focus + len - 1) % len
                };
            }
            RiderIntent::CycleOption { forward } if state.editing => match state.focused_field() {
                RiderField::VehicleType => {
                    state.draft.vehicle_type =
                        cycle(&VehicleType::ALL, state.draft.vehicle_type, forward);
                }
                RiderField::Availability => {
                    state.draft.availability =
                        cycle(&AvailabilityType::ALL, state.draft.availability, forward);
                }
            },
            RiderIntent::Save if state.editing => {
                state.committed = state.draft;
                state.editing = false;
            }
            RiderIntent::Cancel => {
                state.draft = state.committed;
                state.editing = false;
            }
            _ => {}
        }
        state
    }
}
