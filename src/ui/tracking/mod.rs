//! Live order tracking: a pure progress simulation advanced by timer ticks.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::TrackingIntent;
pub use reducer::TrackingReducer;
pub use state::{TrackingPhase, TrackingState, ARRIVED_PROGRESS};
