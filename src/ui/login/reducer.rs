use crate::ui::mvi::Reducer;

use super::intent::LoginIntent;
use super::state::{sanitize_phone, LoginState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                if ch.is_ascii_digit() {
                    state.phone.push(ch);
                }
            }
            LoginIntent::Paste(text) => state.phone.push_str(&sanitize_phone(&text)),
            LoginIntent::Backspace => {
                state.phone.pop();
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_filters_non_digits() {
        let state = "08a03-1"
            .chars()
            .fold(LoginState::default(), |s, ch| {
                LoginReducer::reduce(s, LoginIntent::Input(ch))
            });
        assert_eq!(state.phone, "08031");
    }

    #[test]
    fn paste_and_backspace() {
        let state = LoginReducer::reduce(
            LoginState::default(),
            LoginIntent::Paste("+234 803".to_string()),
        );
        assert_eq!(state.phone, "234803");
        let state = LoginReducer::reduce(state, LoginIntent::Backspace);
        assert_eq!(state.phone, "23480");
    }
}
