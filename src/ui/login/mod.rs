mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{can_continue, sanitize_phone, LoginState, MIN_PHONE_LEN};
