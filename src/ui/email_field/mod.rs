//! Email input field.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Buffer and cursor
//! - `intent.rs` - Editing actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::EmailFieldIntent;
pub use reducer::EmailFieldReducer;
pub use state::EmailFieldState;
