use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// A typed character; non-digits are dropped.
    Input(char),
    Paste(String),
    Backspace,
}

impl Intent for LoginIntent {}
