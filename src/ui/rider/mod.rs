mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::RiderIntent;
pub use reducer::RiderReducer;
pub use state::{RiderDetails, RiderField, RiderState, CURRENT_EARNINGS, DAILY_TARGET};
