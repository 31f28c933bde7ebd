use crate::domain::catalog::ABEOKUTA_LOCATIONS;
use crate::domain::role::cycle;
use crate::domain::{AvailabilityType, BusinessCategory, VehicleType};
use crate::ui::mvi::Reducer;

use super::intent::RegistrationIntent;
use super::state::{RegistrationField, RegistrationState, RegistrationStep};

pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Intent = RegistrationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let field_count = state.fields().len();
        match intent {
            RegistrationIntent::Input(ch) => match state.focused_field() {
                Some(RegistrationField::Phone) => {
                    if ch.is_ascii_digit() {
                        state.form.phone.push(ch);
                    }
                }
                Some(RegistrationField::FullName) => state.form.full_name.push(ch),
                Some(RegistrationField::BusinessName) => state.form.business_name.push(ch),
                _ => {}
            },
            RegistrationIntent::Backspace => match state.focused_field() {
                Some(RegistrationField::Phone) => {
                    state.form.phone.pop();
                }
                Some(RegistrationField::FullName) => {
                    state.form.full_name.pop();
                }
                Some(RegistrationField::BusinessName) => {
                    state.form.business_name.pop();
                }
                _ => {}
            },
            RegistrationIntent::NextField => {
                if field_count > 0 {
                    state.focus = (state.focus + 1) % field_count;
                }
            }
            RegistrationIntent::PrevField => {
                if field_count > 0 {
                    state.focus = (state.focus + field_count - 1) % field_count;
                }
            }
            RegistrationIntent::CycleOption { forward } => {
                let focused = state.focused_field();
                let form = &mut state.form;
                match focused {
                    Some(RegistrationField::Location) => {
                        let next = cycle(&ABEOKUTA_LOCATIONS, form.location.as_str(), forward)
                            .to_string();
                        form.location = next;
                    }
                    Some(RegistrationField::VehicleType) => {
                        form.vehicle_type = cycle(&VehicleType::ALL, form.vehicle_type, forward);
                    }
                    Some(RegistrationField::Availability) => {
                        form.availability =
                            cycle(&AvailabilityType::ALL, form.availability, forward);
                    }
                    Some(RegistrationField::Category) => {
                        form.category = cycle(&BusinessCategory::ALL, form.category, forward);
                    }
                    _ => {}
                }
            }
            RegistrationIntent::Continue => {
                if state.step == RegistrationStep::Details {
                    state.step = RegistrationStep::RoleDetails;
                    state.focus = 0;
                }
            }
        }
        state
    }
}
