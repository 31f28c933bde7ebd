//! Customer dashboard: activity feed, vendor lists, order details,
//! cancellation and the live tracking view.

pub mod feed;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use feed::{ActivityFilter, ActivityGroup, ActivityView, OpenTarget};
pub use intent::CustomerIntent;
pub use reducer::CustomerReducer;
pub use state::{CustomerState, CustomerView};
