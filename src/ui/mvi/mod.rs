//! Model-View-Intent primitives shared by every screen.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!      ↑                                          │
//!      └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything a screen needs to draw itself
//! - **Intent**: a user action or an effect result fed back by the shell
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
