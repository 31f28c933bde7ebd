use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiderIntent {
    ToggleOnline,
    StartEdit,
    /// Move between vehicle and availability while editing.
    MoveFocus { forward: bool },
    CycleOption { forward: bool },
    Save,
    Cancel,
}

impl Intent for RiderIntent {}
