use crate::ui::mvi::UiState;

/// Continue stays disabled below this many digits.
pub const MIN_PHONE_LEN: usize = 10;

/// Keep only ASCII digits.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn can_continue(raw: &str) -> bool {
    sanitize_phone(raw).len() >= MIN_PHONE_LEN
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    /// Digits only.
    pub phone: String,
}

impl UiState for LoginState {}

impl LoginState {
    pub fn with_phone(raw: &str) -> Self {
        Self {
            phone: sanitize_phone(raw),
        }
    }

    pub fn can_continue(&self) -> bool {
        can_continue(&self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_needs_ten_digits_after_stripping() {
        assert!(!can_continue(""));
        assert!(!can_continue("080-312-345"));
        assert!(can_continue("0803123456"));
        assert!(can_continue("+234 803 123 4567"));
        assert!(!can_continue("phone: 0803"));
    }

    #[test]
    fn with_phone_sanitizes() {
        assert_eq!(LoginState::with_phone("(0803) 123-4567").phone, "08031234567");
    }
}
