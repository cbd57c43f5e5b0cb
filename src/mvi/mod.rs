//! Model-View-Intent (MVI) primitives.
//!
//! The lookup workflow and the terminal UI both follow a unidirectional
//! data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Report
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything a view needs
//! - **Intent**: user submissions and lookup completions
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
