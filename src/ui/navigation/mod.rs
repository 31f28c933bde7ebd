//! Top-level screen state machine.
//!
//! ```text
//! login ─→ carousel ─→ onboarding ─→ registration ─→ dashboard
//!   ↑         │  ↑          │  ↑           │             │
//!   └─────────┘  └──────────┘  └───────────┘             │
//!   └───────────────────── logout ───────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{Dashboard, Screen};
