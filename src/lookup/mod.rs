//! Breach lookup workflow.
//!
//! - `client.rs` - HTTP client for the lookup endpoint
//! - `state.rs` - Workflow state, intents and reducer
//! - `controller.rs` - Submission handling and background lookups
//! - `error.rs` - Lookup failures

mod client;
mod controller;
mod error;
mod state;

pub use client::{BreachClient, BreachSource};
pub use controller::LookupController;
pub use error::{LookupError, TRANSPORT_FAILURE_MESSAGE};
pub use state::{classify_response, WorkflowIntent, WorkflowReducer, WorkflowState};
