use super::intent::Intent;
use super::state::UiState;

/// The only place screen state changes.
///
/// Implementations must not perform IO, read clocks or draw randomness;
/// anything of that kind arrives already resolved inside the intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
