use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RegistrationIntent {
    /// Typed character for the focused text field.
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Step the focused choice field through its options.
    CycleOption { forward: bool },
    /// Advance from the shared details step to the role step.
    Continue,
}

impl Intent for RegistrationIntent {}
