//! Breach report data model.
//!
//! Wire types for the breach lookup endpoint and the classified result
//! of a single query.

mod model;

pub use model::{BreachRecord, BreachResponse, LookupOutcome};
